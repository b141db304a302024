use bactlv_core::encoding::reader::Reader;
use bactlv_core::schema::{decode_fields, StandardSchema};
use bactlv_tools::{parse_hex, TableArg};
use clap::Parser;
use std::io::Read;

#[derive(Parser, Debug)]
#[command(name = "bactlv-decode")]
struct Args {
    #[arg(long, value_enum)]
    table: TableArg,
    /// Hex bytes; read from stdin when omitted.
    #[arg(long)]
    hex: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let text = match args.hex {
        Some(hex) => hex,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let bytes = parse_hex(&text)?;

    let mut r = Reader::new(&bytes);
    let record = match decode_fields(&mut r, args.table.fields(), &StandardSchema) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("decode failed at {}: {e}", e.path().join("."));
            std::process::exit(1);
        }
    };
    if !r.is_empty() {
        log::warn!("{} trailing bytes not decoded", r.remaining());
    }
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
