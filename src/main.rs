//! Gomoku CLI
//!
//! 命令行界面，用于驱动棋盘引擎
//!
//! 支持三种模式：
//! 1. 单次命令模式：回放一段棋谱并输出结果
//! 2. 交互模式：在终端里双人对弈
//! 3. Server 模式：长驻进程，通过 stdin/stdout 以 JSON 行通信

use clap::{Parser, Subcommand};
use gomoku_engine::notation::{describe_outcome, format_moves, render_board, replay};
use gomoku_engine::session::{Request, Response, Session};
use gomoku_engine::test_positions::{find_position, ALL_POSITIONS};
use gomoku_engine::{Board, Position, DEFAULT_BOARD_SIZE};
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "gomoku")]
#[command(about = "Gomoku (five-in-a-row) engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 回放棋谱
    Replay {
        /// 走法序列，如 "h8 i9 h9"
        #[arg(long)]
        moves: String,

        /// 棋盘边长
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,

        /// JSON 输出
        #[arg(long)]
        json: bool,
    },

    /// 回放内置的示例棋谱
    Demo {
        /// 棋谱名称
        #[arg(long, default_value = "horizontal")]
        name: String,
    },

    /// 终端双人对弈
    Play {
        /// 棋盘边长
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },

    /// 启动 server 模式（stdin/stdout 通信）
    Server {
        /// 棋盘边长
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

fn print_summary(board: &Board) {
    print!("{}", render_board(board));
    match board.winner() {
        Some(winner) => println!("\nGame over: {} wins", winner),
        None => println!("\n{} to move", board.current_player()),
    }
    println!(
        "Moves ({}): {}",
        board.move_count(),
        format_moves(&board.get_move_history())
    );
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay { moves, size, json } => match replay(size, &moves) {
            Ok(board) => {
                if json {
                    match serde_json::to_string_pretty(&board.get_game_state()) {
                        Ok(s) => println!("{}", s),
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_summary(&board);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Demo { name } => {
            let moves = match find_position(&name) {
                Some(m) => m,
                None => {
                    let names: Vec<&str> = ALL_POSITIONS.iter().map(|(n, _)| *n).collect();
                    eprintln!("Error: unknown demo {:?} (available: {})", name, names.join(", "));
                    std::process::exit(1);
                }
            };
            match replay(DEFAULT_BOARD_SIZE, moves) {
                Ok(board) => print_summary(&board),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Play { size } => {
            if let Err(e) = run_interactive(size) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        Commands::Server { size } => {
            if let Err(e) = run_server(size) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

/// 交互模式主循环
fn run_interactive(size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = Board::with_size(size)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Commands: <coord> (e.g. h8), undo, reset, board, quit");
    print!("{}", render_board(&board));

    loop {
        print!("{} > ", board.current_player());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "board" => print!("{}", render_board(&board)),
            "reset" => {
                board.reset();
                info!("board reset");
                print!("{}", render_board(&board));
            }
            "undo" => match board.undo_move() {
                Ok(()) => print!("{}", render_board(&board)),
                Err(e) => println!("{}", e),
            },
            coord => {
                let pos = match Position::from_notation(coord) {
                    Some(p) => p,
                    None => {
                        println!("Unknown command or coordinate: {}", coord);
                        continue;
                    }
                };
                match board.play(pos) {
                    Ok(outcome) => {
                        print!("{}", render_board(&board));
                        println!("{}", describe_outcome(pos, outcome));
                        if outcome.is_win() {
                            println!("Type 'reset' for a new game or 'quit' to exit.");
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

/// Server 模式主循环
/// 从 stdin 读取 JSON 请求，返回 JSON 响应到 stdout
fn run_server(size: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(size)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    info!("server started, board size {}", size);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        // 空行跳过
        if line.trim().is_empty() {
            continue;
        }

        // 解析请求
        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => match session.handle(&request) {
                Some(r) => r,
                None => break,
            },
            Err(e) => {
                warn!("invalid request: {}", e);
                Response::error(&format!("Invalid JSON: {}", e))
            }
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    info!("server stopped");
    Ok(())
}
