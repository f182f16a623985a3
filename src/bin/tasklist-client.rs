//! Line-oriented front end for the task server.
//!
//! Reads one command per line from stdin and prints the cached list after
//! every command:
//!
//! ```text
//! login <username> <password>    list              add <text>
//! edit <id>   draft <text>   save   cancel         toggle <id>
//! rm <id>     logout         quit
//! ```

use tasklist_api::{ClientConfig, ClientError, SessionClient, TaskId, telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing(false, "warn");

    let config = ClientConfig::from_env();
    let mut client = SessionClient::new(&config)?;
    println!("Task list client for {}", config.base_url);
    println!("Type `login <username> <password>` to begin, `quit` to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        if let Err(err) = run_command(&mut client, line).await {
            println!("! {}", err.user_message());
        }
        render(&client);
    }

    Ok(())
}

async fn run_command(client: &mut SessionClient, line: &str) -> Result<(), ClientError> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "login" => {
            let mut parts = rest.split_whitespace();
            let username = parts.next().unwrap_or_default();
            let password = parts.next().unwrap_or_default();
            client.login(username, password).await
        }
        "list" => client.refresh().await,
        "add" => client.add_task(rest).await.map(|_| ()),
        "edit" | "toggle" | "rm" => {
            let Ok(id) = rest.trim().parse::<TaskId>() else {
                println!("? `{}` is not a task id", rest.trim());
                return Ok(());
            };
            match command {
                "edit" => client.begin_edit(id),
                "toggle" => client.toggle(id).await.map(|_| ()),
                _ => client.delete(id).await,
            }
        }
        "draft" => client.set_draft(rest),
        "save" => client.save_edit().await.map(|_| ()),
        "cancel" => {
            client.cancel_edit();
            Ok(())
        }
        "logout" => {
            client.logout();
            Ok(())
        }
        other => {
            println!("? unknown command `{other}`");
            Ok(())
        }
    }
}

fn render(client: &SessionClient) {
    let Some(username) = client.username() else {
        if let Some(error) = client.login_error() {
            println!("Login failed: {error}");
        }
        println!("(logged out)");
        return;
    };

    println!("Task Manager - {username}");
    if client.tasks().is_empty() {
        println!("  No tasks yet. Add your first task with `add <text>`.");
    }
    for task in client.tasks() {
        let mark = if task.completed { "x" } else { " " };
        match client.editing() {
            Some(edit) if edit.task_id == task.id => {
                println!("  [{mark}] {:>3}  {}  (editing: {})", task.id, task.text, edit.draft)
            }
            _ => println!("  [{mark}] {:>3}  {}", task.id, task.text),
        }
    }
}
