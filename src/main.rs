use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

use pdf2docx::Converter;

#[derive(Parser)]
#[command(name = "pdf2docx", version, about = "Convert a PDF file to DOCX")]
struct Args {
    /// Input PDF file (the DOCX is written next to it)
    input_pdf: PathBuf,
}

fn main() {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let input = args.input_pdf;
    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        std::process::exit(1);
    }
    if !input.is_file() {
        eprintln!("Error: not a file: {}", input.display());
        std::process::exit(1);
    }

    let output = pdf2docx::docx_output_path(&input);

    let converter = match Converter::open(&input) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let result = converter.convert(&output, 0, None);
    converter.close();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    println!("Converted '{}' to '{}'", input.display(), output.display());
}
