//! 命令解析与执行

use std::fmt;

use crate::api::ApiClient;
use crate::format;

const LOGIN_FORMAT: &str = "login sc21ca.pythonanywhere.com [username] [password] (omit the preceding 'http://' and subsequent '/'; prefix 'https://' for HTTPS servers)";

/// 参数完整、可以直接发送的请求
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Register {
        username: String,
        email: String,
        password: String,
    },
    Login {
        host: String,
        username: String,
        password: String,
    },
    Logout,
    List,
    View,
    Average {
        professor_code: String,
        module_code: String,
    },
    Rate {
        professor_code: String,
        module_code: String,
        year: String,
        semester: String,
        rating: String,
    },
}

/// 解析后的用户输入，register/login 缺少的参数由调用方补全
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Register {
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
    },
    Login {
        host: String,
        username: Option<String>,
        password: Option<String>,
    },
    Ready(Request),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    Usage {
        command: &'static str,
        format: &'static str,
    },
    Unknown,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "Please enter a command"),
            ParseError::Usage { command, format } => {
                write!(f, "Invalid '{command}' command. Format: {format}")
            }
            ParseError::Unknown => write!(f, "Invalid command"),
        }
    }
}

impl std::error::Error for ParseError {}

fn usage(command: &'static str, format: &'static str) -> ParseError {
    ParseError::Usage { command, format }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((word, args)) = parts.split_first() else {
            return Err(ParseError::Empty);
        };
        let arg = |i: usize| args.get(i).map(|s| s.to_string());

        match word.to_lowercase().as_str() {
            "exit" => Ok(Command::Exit),
            "register" => {
                if args.len() > 3 {
                    return Err(usage("register", "register [username] [email] [password]"));
                }
                Ok(Command::Register {
                    username: arg(0),
                    email: arg(1),
                    password: arg(2),
                })
            }
            "login" => match args {
                [host, ..] if args.len() <= 3 => Ok(Command::Login {
                    host: host.to_string(),
                    username: arg(1),
                    password: arg(2),
                }),
                _ => Err(usage("login", LOGIN_FORMAT)),
            },
            "logout" => match args {
                [] => Ok(Command::Ready(Request::Logout)),
                _ => Err(usage("logout", "logout")),
            },
            "list" => match args {
                [] => Ok(Command::Ready(Request::List)),
                _ => Err(usage("list", "list")),
            },
            "view" => match args {
                [] => Ok(Command::Ready(Request::View)),
                _ => Err(usage("view", "view")),
            },
            "average" => match args {
                [professor_code, module_code] => Ok(Command::Ready(Request::Average {
                    professor_code: professor_code.to_string(),
                    module_code: module_code.to_string(),
                })),
                _ => Err(usage(
                    "average",
                    "average [professorCode] [moduleCode]",
                )),
            },
            "rate" => match args {
                [professor_code, module_code, year, semester, rating] => {
                    Ok(Command::Ready(Request::Rate {
                        professor_code: professor_code.to_string(),
                        module_code: module_code.to_string(),
                        year: year.to_string(),
                        semester: semester.to_string(),
                        rating: rating.to_string(),
                    }))
                }
                _ => Err(usage(
                    "rate",
                    "rate [professorCode] [moduleCode] [year] [semester] [rating]",
                )),
            },
            _ => Err(ParseError::Unknown),
        }
    }
}

/// 发送请求并返回要打印的文本
pub async fn execute(client: &mut ApiClient, request: Request) -> String {
    let output = match request {
        Request::Register {
            username,
            email,
            password,
        } => client
            .register(&username, &email, &password)
            .await
            .map(|reply| reply.render(|body| body)),
        Request::Login {
            host,
            username,
            password,
        } => match client.rebind_host(&host) {
            Ok(()) => client
                .login(&username, &password)
                .await
                .map(|reply| reply.render(|body| body)),
            Err(e) => Err(e),
        },
        Request::Logout => client.logout().await.map(|reply| reply.render(|body| body)),
        Request::List => client
            .list()
            .await
            .map(|reply| reply.render(|rows| format::module_table(&rows))),
        Request::View => client
            .view()
            .await
            .map(|reply| reply.render(|rows| format::professor_ratings(&rows))),
        Request::Average {
            professor_code,
            module_code,
        } => client
            .average(&professor_code, &module_code)
            .await
            .map(|reply| reply.render(|row| format::module_rating(&row))),
        Request::Rate {
            professor_code,
            module_code,
            year,
            semester,
            rating,
        } => client
            .rate(&professor_code, &module_code, &year, &semester, &rating)
            .await
            .map(|reply| reply.render(|body| body)),
    };

    output.unwrap_or_else(|e| {
        tracing::debug!("Request error: {e:?}");
        format!("Request failed: {e}")
    })
}
