//! huffzw CLI
//! Usage:
//!   huffzw <huffman|lzw> compress   <input_file> <output_file>
//!   huffzw <huffman|lzw> decompress <input_file> <output_file>

use huffzw::Codec;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::{env, process};

fn usage() -> ! {
    eprintln!("Usage:");
    eprintln!("  huffzw <huffman|lzw> compress   <input> <output>");
    eprintln!("  huffzw <huffman|lzw> decompress <input> <output>");
    process::exit(1);
}

fn run(
    codec: Codec,
    command: &str,
    input_path: &str,
    output_path: &str,
) -> huffzw::Result<(u64, u64)> {
    let mut input = BufReader::new(File::open(input_path)?);
    let mut output = BufWriter::new(File::create(output_path)?);

    let sizes = match command {
        "compress" => codec.compress_stream(&mut input, &mut output)?,
        "decompress" => codec.decompress_stream(&mut input, &mut output)?,
        _ => usage(),
    };
    output.flush()?;
    Ok(sizes)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 5 {
        usage();
    }

    let codec: Codec = args[1].parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        usage();
    });
    let command = args[2].as_str();
    if command != "compress" && command != "decompress" {
        eprintln!("Unknown command: {}", command);
        usage();
    }

    match run(codec, command, &args[3], &args[4]) {
        Ok((bytes_in, bytes_out)) => {
            log::info!("{} {} finished", codec, command);
            println!("Done. {} bytes → {} bytes", bytes_in, bytes_out);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
