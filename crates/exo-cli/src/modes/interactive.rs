//! Line-oriented front end for the account flow.
//!
//! This is a rendering collaborator: it prints snapshots of the flow state,
//! turns typed lines into events, and lets the runtime settle outstanding
//! provider calls before the next prompt. All flow logic lives in
//! `exo-flow`; this module only renders and forwards input.

use std::io::Write;

use anyhow::Result;
use exo_core::config::Config;
use exo_core::identity::{IdentityClient, IdentityConfig};
use exo_flow::FlowRuntime;
use exo_flow::events::{LoginEvent, RegistrationEvent, UiEvent};
use exo_flow::state::Screen;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

type Input = Lines<BufReader<Stdin>>;

/// Runs the interactive account flow until the user quits or stdin closes.
pub async fn run(config: &Config) -> Result<()> {
    let identity = IdentityConfig::from_env(&config.identity)?;
    let mut runtime = FlowRuntime::new(IdentityClient::new(identity));
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let keep_going = match runtime.state.screen {
            Screen::Registration => registration_screen(&mut runtime, &mut input).await?,
            Screen::Login => login_screen(&mut runtime, &mut input).await?,
            Screen::Main => main_screen(&mut runtime, &mut input).await?,
        };
        if !keep_going {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

async fn registration_screen(runtime: &mut FlowRuntime, input: &mut Input) -> Result<bool> {
    println!();
    println!("== Create User ==");
    if let Some(error) = &runtime.state.registration.error {
        println!("! {error}");
    }
    println!("[1] Create account  [2] I already have an account  [q] Quit");

    let Some(choice) = prompt(input, "> ").await? else {
        return Ok(false);
    };
    match choice.trim() {
        "1" => {
            let Some(name) = prompt(input, "Name: ").await? else {
                return Ok(false);
            };
            let Some(email) = prompt(input, "Email: ").await? else {
                return Ok(false);
            };
            let Some(password) = prompt(input, "Password: ").await? else {
                return Ok(false);
            };

            for event in [
                RegistrationEvent::NameChanged(name),
                RegistrationEvent::EmailChanged(email),
                RegistrationEvent::PasswordChanged(password),
                RegistrationEvent::Submit,
            ] {
                runtime.dispatch(UiEvent::Registration(event));
            }
            runtime.settle().await;

            if runtime.state.registration.account_created
                && let Some(session) = &runtime.state.session
            {
                println!("Account created successfully: {}", session.uid);
            }
            Ok(true)
        }
        "2" => {
            runtime.dispatch(UiEvent::ShowLogin);
            Ok(true)
        }
        "q" | "Q" => Ok(false),
        _ => Ok(true),
    }
}

async fn login_screen(runtime: &mut FlowRuntime, input: &mut Input) -> Result<bool> {
    println!();
    println!("== Login ==");
    if let Some(error) = &runtime.state.login.error {
        println!("! {error}");
    }
    println!("[1] Login  [b] Back  [q] Quit");

    let Some(choice) = prompt(input, "> ").await? else {
        return Ok(false);
    };
    match choice.trim() {
        "1" => {
            let Some(email) = prompt(input, "Email: ").await? else {
                return Ok(false);
            };
            let Some(password) = prompt(input, "Password: ").await? else {
                return Ok(false);
            };

            for event in [
                LoginEvent::EmailChanged(email),
                LoginEvent::PasswordChanged(password),
                LoginEvent::Submit,
            ] {
                runtime.dispatch(UiEvent::Login(event));
            }
            runtime.settle().await;

            if runtime.state.login.login_succeeded {
                println!("Successful login!");
            }
            Ok(true)
        }
        "b" | "B" => {
            runtime.dispatch(UiEvent::Back);
            Ok(true)
        }
        "q" | "Q" => Ok(false),
        _ => Ok(true),
    }
}

async fn main_screen(runtime: &mut FlowRuntime, input: &mut Input) -> Result<bool> {
    println!();
    println!("== EXOEXPLORER ==");
    println!("Explore exoplanets and stars");
    if let Some(session) = &runtime.state.session {
        println!("Signed in as {}", session.email);
    }
    println!("[b] Back  [q] Quit");

    let Some(choice) = prompt(input, "> ").await? else {
        return Ok(false);
    };
    match choice.trim() {
        "b" | "B" => {
            runtime.dispatch(UiEvent::Back);
            Ok(true)
        }
        "q" | "Q" => Ok(false),
        _ => Ok(true),
    }
}

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}
