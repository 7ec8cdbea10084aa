//! rateprofs 交互式命令行客户端

mod api;
mod commands;
mod format;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

use api::{ApiClient, DEFAULT_BASE_URL};
use commands::{Command, ParseError, Request, execute};

#[derive(Debug, Parser)]
#[command(name = "rateprofs-client", version, about = "Interactive client for the rateprofs API")]
struct Args {
    /// API 根地址
    #[arg(long, env = "RATEPROFS_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// 标准输入行读取与提示
struct Console {
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// 打印提示并读取一行，EOF 返回 None
    async fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;
        Ok(self.lines.next_line().await?)
    }

    /// 已在命令行给出时直接使用，否则提示输入
    async fn fill(&mut self, value: Option<String>, prompt: &str) -> Result<Option<String>> {
        match value {
            Some(v) => Ok(Some(v)),
            None => Ok(self.ask(prompt).await?.map(|s| s.trim().to_string())),
        }
    }
}

/// 补全 register/login 缺少的参数
async fn complete(console: &mut Console, command: Command) -> Result<Option<Request>> {
    let request = match command {
        Command::Exit => None,
        Command::Ready(request) => Some(request),
        Command::Register {
            username,
            email,
            password,
        } => {
            let Some(username) = console.fill(username, "Please enter a username: ").await? else {
                return Ok(None);
            };
            let Some(email) = console.fill(email, "Please enter an email: ").await? else {
                return Ok(None);
            };
            let Some(password) = console.fill(password, "Please enter a password: ").await? else {
                return Ok(None);
            };
            Some(Request::Register {
                username,
                email,
                password,
            })
        }
        Command::Login {
            host,
            username,
            password,
        } => {
            let Some(username) = console
                .fill(username, "Please enter your username: ")
                .await?
            else {
                return Ok(None);
            };
            let Some(password) = console
                .fill(password, "Please enter your password: ")
                .await?
            else {
                return Ok(None);
            };
            Some(Request::Login {
                host,
                username,
                password,
            })
        }
    };
    Ok(request)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut client = ApiClient::new(&args.base_url)?;
    tracing::debug!("Using base URL {}", client.base_url());

    let mut console = Console::new();
    println!("Welcome to the API Client. Type 'exit' to quit.");

    loop {
        let Some(line) = console.ask("Enter command: ").await? else {
            println!();
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == Command::Exit {
            println!("Exiting...");
            break;
        }

        // 输入中途结束时直接退出
        let Some(request) = complete(&mut console, command).await? else {
            println!();
            break;
        };

        println!("{}", execute(&mut client, request).await);
    }

    Ok(())
}
