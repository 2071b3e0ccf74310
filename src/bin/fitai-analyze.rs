//! One-shot image analysis.
//!
//! Loads an image, validates it (jpeg/png/gif/webp, max 5 MiB), sends it
//! to the vision endpoint, and prints the assessment.
//!
//! # Usage
//!
//! ```bash
//! fitai-analyze photo.jpg
//! fitai-analyze --vision-model gemini-1.5-pro photo.png
//! ```

use arrrg::CommandLine;

use fitai::Gemini;
use fitai::chat::{ChatSession, Notice, TrainerArgs, TrainerConfig, load_image};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) =
        TrainerArgs::from_command_line_relaxed("fitai-analyze [OPTIONS] <image-path>");
    let config = TrainerConfig::from(args);

    let Some(path) = free.first() else {
        eprintln!("usage: fitai-analyze [OPTIONS] <image-path>");
        std::process::exit(1);
    };

    let image = match load_image(path) {
        Ok(image) => image,
        Err(err) => {
            let notice = Notice::from_error(&err);
            eprintln!("{}: {}", notice.title, notice.description);
            std::process::exit(1);
        }
    };

    let client = Gemini::new(None)?;
    let mut session = ChatSession::new(client, config);

    match session.analyze_image(&image).await {
        Ok(_) => {
            for entry in session.transcript() {
                println!("{}", entry.content);
            }
            Ok(())
        }
        Err(err) => {
            let notice = Notice::from_error(&err);
            eprintln!("{}: {}", notice.title, notice.description);
            std::process::exit(1);
        }
    }
}
