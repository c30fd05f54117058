/**
 * Authgate Client Entry Point
 *
 * A small terminal loop driving the login/registration form. Rendering
 * is deliberately minimal; the form state machine does all the work.
 */

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::rc::Rc;
use std::cell::Cell;

use authgate::client::api::HttpAuthApi;
use authgate::client::config::Config;
use authgate::client::form::{FormMode, LoginForm};
use authgate::client::storage::TokenStore;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = match TokenStore::new() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("cannot set up token storage: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let api = HttpAuthApi::new(Config::new(), store);

    let mut form = LoginForm::new();
    let logged_in = Rc::new(Cell::new(false));
    let flag = logged_in.clone();
    form.on_login(move || flag.set(true));

    println!("Commands: submit, toggle, forgot, quit");

    loop {
        let mode = match form.mode() {
            FormMode::SigningIn => "sign in",
            FormMode::Registering => "register",
        };
        let command = match prompt(&format!("[{}]", mode)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("input error: {}", e);
                return ExitCode::FAILURE;
            }
        };

        match command.as_str() {
            "submit" => {
                form.email = prompt("email").unwrap_or_default();
                form.password = prompt("password").unwrap_or_default();
                form.submit(&api);
            }
            "toggle" => form.toggle_mode(),
            "forgot" => {
                form.email = prompt("email").unwrap_or_default();
                form.forgot_password();
            }
            "quit" => return ExitCode::SUCCESS,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        }

        if let Some(error) = form.error() {
            println!("error: {}", error);
        }
        if let Some(message) = form.message() {
            println!("{}", message);
        }
        if logged_in.get() {
            println!("proceeding to the main app");
            return ExitCode::SUCCESS;
        }
    }
}
