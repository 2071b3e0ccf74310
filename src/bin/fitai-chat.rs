//! Interactive trainer chat.
//!
//! This binary provides a REPL interface for chatting with the Fit.AI
//! personal trainer over the generative-language API.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! fitai-chat
//!
//! # Specify a model
//! fitai-chat --model gemini-1.5-flash
//!
//! # Generate the greeting with a model call instead of fixed text
//! fitai-chat --generated-greeting
//!
//! # Disable colors (useful for piping output)
//! fitai-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/help` - Show available commands
//! - `/clear` - Clear the conversation and greet again
//! - `/analyze <path>` - Analyze a photo
//! - `/model <name>` - Change the model
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the application

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use fitai::chat::{
    ChatSession, Notice, TrainerArgs, TrainerCommand, TrainerConfig, help_text, load_image,
    parse_command,
};
use fitai::{Gemini, Model};

/// Main entry point for the fitai-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = TrainerArgs::from_command_line_relaxed("fitai-chat [OPTIONS]");
    let config = TrainerConfig::from(args);
    let use_color = config.use_color;

    let client = Gemini::new(None)?;
    let mut session = ChatSession::new(client, config);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupt handling
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("Fit.AI (model: {})", session.model());
    println!("Type /help for commands, /quit to exit\n");

    if let Err(err) = session.start().await {
        print_notice(use_color, &Notice::from_error(&err));
        return Err(Box::new(err) as Box<dyn std::error::Error>);
    }
    if let Some(greeting) = session.transcript().last() {
        print_bot(use_color, &greeting.content);
    }

    loop {
        if interrupted.load(Ordering::Relaxed) {
            println!("Goodbye!");
            break;
        }

        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        TrainerCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        TrainerCommand::Clear => {
                            session.reset();
                            match session.start().await {
                                Ok(()) => {
                                    print_info(use_color, "Conversation cleared.");
                                    if let Some(greeting) = session.transcript().last() {
                                        print_bot(use_color, &greeting.content);
                                    }
                                }
                                Err(err) => {
                                    print_notice(use_color, &Notice::from_error(&err));
                                }
                            }
                        }
                        TrainerCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        TrainerCommand::Stats => {
                            let stats = session.stats();
                            print_info(use_color, &format!("model: {}", stats.model));
                            print_info(use_color, &format!("vision model: {}", stats.vision_model));
                            print_info(use_color, &format!("messages: {}", stats.message_count));
                            print_info(use_color, &format!("requests: {}", stats.total_requests));
                        }
                        TrainerCommand::Model(model_name) => {
                            session.set_model(Model::from(model_name.as_str()));
                            print_info(use_color, &format!("Model changed to: {}", model_name));
                        }
                        TrainerCommand::VisionModel(model_name) => {
                            session.set_vision_model(Model::from(model_name.as_str()));
                            print_info(
                                use_color,
                                &format!("Vision model changed to: {}", model_name),
                            );
                        }
                        TrainerCommand::System(prompt) => {
                            let cleared = prompt.is_none();
                            session.set_system_prompt(prompt);
                            if cleared {
                                print_info(use_color, "System prompt restored to default.");
                            } else {
                                print_info(use_color, "System prompt set.");
                            }
                        }
                        TrainerCommand::Analyze(path) => match load_image(&path) {
                            Ok(image) => match session.analyze_image(&image).await {
                                Ok(_) => {
                                    let count = session.message_count();
                                    for entry in &session.transcript()[count - 2..] {
                                        print_bot(use_color, &entry.content);
                                    }
                                }
                                Err(err) => {
                                    print_notice(use_color, &Notice::from_error(&err));
                                }
                            },
                            Err(err) => {
                                print_notice(use_color, &Notice::from_error(&err));
                            }
                        },
                        TrainerCommand::MaxTokens(value) => {
                            session.set_max_output_tokens(value);
                            print_info(use_color, &format!("max_tokens set to {value}"));
                        }
                        TrainerCommand::Temperature(value) => {
                            session.set_temperature(Some(value));
                            print_info(use_color, &format!("temperature set to {value}"));
                        }
                        TrainerCommand::ClearTemperature => {
                            session.set_temperature(None);
                            print_info(use_color, "temperature cleared");
                        }
                        TrainerCommand::TopP(value) => {
                            session.set_top_p(Some(value));
                            print_info(use_color, &format!("top_p set to {value}"));
                        }
                        TrainerCommand::ClearTopP => {
                            session.set_top_p(None);
                            print_info(use_color, "top_p cleared");
                        }
                        TrainerCommand::TopK(value) => {
                            session.set_top_k(Some(value));
                            print_info(use_color, &format!("top_k set to {value}"));
                        }
                        TrainerCommand::ClearTopK => {
                            session.set_top_k(None);
                            print_info(use_color, "top_k cleared");
                        }
                        TrainerCommand::Invalid(message) => {
                            print_info(use_color, &message);
                        }
                    }
                    continue;
                }

                match session.send(line).await {
                    Ok(reply) => {
                        print_bot(use_color, &reply);
                    }
                    Err(err) => {
                        print_notice(use_color, &Notice::from_error(&err));
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_bot(use_color: bool, text: &str) {
    if use_color {
        println!("\x1b[1;32mFit.AI:\x1b[0m {}\n", text);
    } else {
        println!("Fit.AI: {}\n", text);
    }
}

fn print_info(use_color: bool, text: &str) {
    if use_color {
        println!("\x1b[2m{}\x1b[0m", text);
    } else {
        println!("{}", text);
    }
}

fn print_notice(use_color: bool, notice: &Notice) {
    if use_color {
        eprintln!("\x1b[1;31m{}:\x1b[0m {}", notice.title, notice.description);
    } else {
        eprintln!("{}: {}", notice.title, notice.description);
    }
}
