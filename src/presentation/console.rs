//! Console Front End
//!
//! Line-oriented terminal loop driving the session controller. Commands
//! stand in for the credential / directory / conversation screens of the
//! served page; bare text goes to the open conversation.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

use crate::application::controller::{AuthAction, SessionController};
use crate::domain::api::BackendApi;
use crate::domain::transport::ChatTransport;
use crate::shared::error::ChatError;

const HELP: &str = "\
commands:
  /register <username> <password>
  /login <username> <password>
  /users
  /open <user-id>
  /history <user-id>
  /back
  /bot
  /quit
anything else is sent to the open conversation";

enum LoopEvent {
    Line(String),
    Inbound(Option<String>),
    Eof,
}

/// Run the interactive loop until `/quit` or stdin EOF.
pub async fn run<B, T>(mut controller: SessionController<B, T>) -> anyhow::Result<()>
where
    B: BackendApi,
    T: ChatTransport,
{
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut inbound: Option<UnboundedReceiver<String>> = None;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => LoopEvent::Line(line),
                None => LoopEvent::Eof,
            },
            frame = next_inbound(&mut inbound) => LoopEvent::Inbound(frame),
        };

        match event {
            LoopEvent::Eof => break,
            LoopEvent::Inbound(Some(frame)) => {
                if controller.record_inbound(&frame) {
                    println!("{frame}");
                }
            }
            LoopEvent::Inbound(None) => {
                // Transport closed out of band. The conversation stays
                // dead until the user re-selects one.
                controller.connection_lost();
                inbound = None;
                println!("(connection closed)");
            }
            LoopEvent::Line(line) => {
                if !handle_line(&mut controller, &mut inbound, line.trim()).await {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Awaits the next inbound frame, or forever when no conversation is
/// open so the other select branch stays live.
async fn next_inbound(inbound: &mut Option<UnboundedReceiver<String>>) -> Option<String> {
    match inbound {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Dispatch one input line. Returns false when the loop should stop.
async fn handle_line<B, T>(
    controller: &mut SessionController<B, T>,
    inbound: &mut Option<UnboundedReceiver<String>>,
    line: &str,
) -> bool
where
    B: BackendApi,
    T: ChatTransport,
{
    let mut parts = line.splitn(3, ' ');
    let command = parts.next().unwrap_or("");

    match command {
        "" => {}

        "/quit" => return false,

        "/register" | "/login" => {
            let action = if command == "/register" {
                AuthAction::Register
            } else {
                AuthAction::Login
            };
            let username = parts.next().unwrap_or("");
            let password = parts.next().unwrap_or("");

            match controller.authenticate(action, username, password).await {
                Ok(()) => {
                    println!("signed in as {username}");
                    print_directory(controller);
                }
                Err(ChatError::Validation(msg)) => println!("{msg}"),
                Err(e) => {
                    warn!(error = %e, "authentication failed");
                    println!(
                        "{}",
                        match action {
                            AuthAction::Register => "registration failed",
                            AuthAction::Login => "login failed",
                        }
                    );
                }
            }
        }

        "/users" => match controller.load_directory().await {
            Ok(()) => print_directory(controller),
            Err(e) => {
                warn!(error = %e, "directory load failed");
                println!("could not load users");
            }
        },

        "/open" => match parts.next().and_then(|id| id.parse::<i64>().ok()) {
            Some(peer_id) => match controller.start_conversation(peer_id).await {
                Ok(rx) => {
                    *inbound = Some(rx);
                    println!("conversation open (/back to return)");
                }
                Err(e) => {
                    warn!(error = %e, "could not open conversation");
                    println!("could not open conversation");
                }
            },
            None => println!("usage: /open <user-id>"),
        },

        "/history" => match parts.next().and_then(|id| id.parse::<i64>().ok()) {
            Some(peer_id) => match controller.fetch_history(peer_id).await {
                Ok(history) => {
                    for line in history {
                        println!("{line}");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "history fetch failed");
                    println!("could not load history");
                }
            },
            None => println!("usage: /history <user-id>"),
        },

        "/back" => {
            controller.end_conversation().await;
            *inbound = None;
            print_directory(controller);
        }

        "/bot" => match controller.build_bot_link().await {
            Ok(link) => println!("open in a browser: {link}"),
            Err(e) => println!("{e}"),
        },

        _ if command.starts_with('/') => println!("unknown command\n{HELP}"),

        _ => {
            let before = controller.transcript().len();
            if let Err(e) = controller.send(line).await {
                warn!(error = %e, "send failed");
                println!("(message not sent)");
            } else if let Some(echo) = controller.transcript().get(before) {
                println!("{echo}");
            }
        }
    }

    true
}

fn print_directory<B, T>(controller: &SessionController<B, T>)
where
    B: BackendApi,
    T: ChatTransport,
{
    if controller.directory().is_empty() {
        println!("no other users yet");
        return;
    }
    println!("users (/open <user-id> to chat):");
    for entry in controller.directory() {
        println!("  [{}] {}", entry.id, entry.username);
    }
}
