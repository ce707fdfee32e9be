//! Interactive WordScore console.
//!
//! # Responsibility
//! - Wire dictionary, database and service together at process startup.
//! - Drive the prompt loop and map outcomes to console messages.
//!
//! # Invariants
//! - Dictionary or database bootstrap failure aborts startup with a
//!   non-zero exit code; it is never retried per word.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use wordscore_core::db::{open_db, open_db_in_memory};
use wordscore_core::{
    default_log_level, init_logging, Dictionary, RepoResult, SqliteWordRepository, WordOutcome,
    WordRepository, WordService,
};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(dictionary_path) = args.next() else {
        eprintln!("usage: wordscore <dictionary-path> [db-path]");
        return ExitCode::FAILURE;
    };
    let db_path = args.next();

    if let Ok(log_dir) = std::env::var("WORDSCORE_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("logging setup failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let dictionary = match Dictionary::load(&dictionary_path) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("failed to load dictionary: {err}");
            return ExitCode::FAILURE;
        }
    };

    let conn = match db_path.as_deref() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let service = WordService::new(dictionary, SqliteWordRepository::new(&conn));
    run_console(&service)
}

fn run_console<R: WordRepository>(service: &WordService<R>) -> ExitCode {
    println!(
        "Welcome to the WordScore console ({} dictionary words loaded).",
        service.dictionary().len()
    );
    println!("Type a word to score it, `ranked` to list scored words, `exit` to quit.");

    let stdin = io::stdin();
    loop {
        print!("word> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                eprintln!("input error: {err}");
                return ExitCode::FAILURE;
            }
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            println!("Goodbye, thanks for playing!");
            return ExitCode::SUCCESS;
        }

        if input.eq_ignore_ascii_case("ranked") {
            if let Err(err) = print_ranked(service) {
                eprintln!("storage error: {err}");
                return ExitCode::FAILURE;
            }
            continue;
        }

        match service.process(input) {
            Ok(WordOutcome::Scored {
                word,
                score,
                created,
            }) => {
                if created {
                    println!("`{word}` scores {score}.");
                } else {
                    println!("`{word}` was already scored: {score}.");
                }
            }
            Ok(WordOutcome::Rejected(reason)) => println!("Rejected: {}.", reason.message()),
            Err(err) => {
                eprintln!("storage error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }
}

fn print_ranked<R: WordRepository>(service: &WordService<R>) -> RepoResult<()> {
    let records = service.ranked_words()?;
    if records.is_empty() {
        println!("No words scored yet.");
        return Ok(());
    }

    println!("{} scored word(s), best first:", records.len());
    for record in records {
        println!("  {:>4}  {}", record.score, record.word);
    }
    Ok(())
}
