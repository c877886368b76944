//! Web 服务器主程序入口

use polyglot::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // 解析命令行参数
    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr = "127.0.0.1".to_string();
    let mut port = 7080u16;

    // 简单的命令行参数解析
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    // 翻译 API 地址只由外壳读取环境变量，核心不感知
    let api_url = std::env::var("POLYGLOT_API_URL").ok();

    let web_config = WebConfig {
        bind_addr,
        port,
        api_url,
    };

    let server = WebServer::new(web_config);
    server.start().await?;

    Ok(())
}

fn print_help() {
    println!("Polyglot Web Server");
    println!();
    println!("USAGE:");
    println!("    polyglot-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 7080]");
    println!("    -h, --help               Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    POLYGLOT_API_URL         Translation API endpoint override");
    println!();
    println!("EXAMPLES:");
    println!("    polyglot-web");
    println!("    polyglot-web --bind 0.0.0.0 --port 3000");
}
