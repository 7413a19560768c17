#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
use eetrack::{
    parse_range, parse_usize, validate_float, validate_int, validate_long, validate_unsigned_int,
    validate_unsigned_long, Eeprom, MmapEeprom, StoreConfig, TrackedStore, ValueKind, ERASED_BYTE, VERSION, VERSION_CODE,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "eetrack CLI - inspect and edit raw EEPROM image files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Create an erased image
    Create {
        /// Image file to create
        path: String,

        /// Image size in bytes (decimal or 0x hex)
        #[arg(long, default_value = "1024")]
        size: String,
    },
    /// Write one value, skipping the write if it is already stored
    Write {
        path: String,

        /// Address to write at
        #[arg(long)]
        offset: String,

        /// bit, int16, int32 or float32
        #[arg(long)]
        kind: String,

        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Read consecutive values of one kind
    Read {
        path: String,

        #[arg(long)]
        offset: String,

        #[arg(long)]
        kind: String,

        /// Number of values to read
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Hex dump of an address range (format: start:end)
    Dump {
        path: String,

        #[arg(long)]
        range: Option<String>,
    },
    /// Check a value against an inclusive range
    Validate {
        #[arg(long, value_enum)]
        kind: RangeKind,

        #[arg(long, allow_hyphen_values = true)]
        min: String,

        #[arg(long, allow_hyphen_values = true)]
        max: String,

        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Show image details as JSON
    Info {
        path: String,

        /// Region start for the reported store configuration
        #[arg(long, default_value = "0")]
        start: String,

        /// Region length for the reported store configuration
        #[arg(long)]
        len: Option<String>,
    },
}

/// Numeric domains accepted by the range validators
#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum RangeKind {
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Create { path, size } => {
            let size = parse_usize(size)?;
            MmapEeprom::create(path, size)?;
            println!("Created {path} ({size} bytes, erased)");
        }
        Commands::Write {
            path,
            offset,
            kind,
            value,
        } => handle_write(path, offset, kind, value)?,
        Commands::Read {
            path,
            offset,
            kind,
            count,
        } => handle_read(path, offset, kind, *count)?,
        Commands::Dump { path, range } => handle_dump(path, range)?,
        Commands::Validate {
            kind,
            min,
            max,
            value,
        } => handle_validate(*kind, min, max, value)?,
        Commands::Info { path, start, len } => handle_info(path, start, len)?,
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example eeprom_cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn handle_write(
    path: &str,
    offset: &str,
    kind: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut address = parse_usize(offset)?;
    let kind: ValueKind = kind.parse()?;
    let mut store = TrackedStore::new(MmapEeprom::open(path)?, 0);

    let start = address;
    let written = match kind {
        ValueKind::Bit => store.try_write_at(&mut address, parse_bit(value)?)?,
        ValueKind::Int16 => store.try_write_at(&mut address, value.parse::<i16>()?)?,
        ValueKind::Int32 => store.try_write_at(&mut address, value.parse::<i32>()?)?,
        ValueKind::Float32 => store.try_write_at(&mut address, value.parse::<f32>()?)?,
    };
    store.storage().flush()?;

    if written {
        println!("{kind} {value} written at {start:#06x}, next address {address:#06x}");
    } else {
        println!("{kind} {value} already stored at {start:#06x}, write skipped");
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_read(
    path: &str,
    offset: &str,
    kind: &str,
    count: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = parse_usize(offset)?;
    let kind: ValueKind = kind.parse()?;
    let mut store = TrackedStore::new(MmapEeprom::open(path)?, start);

    for _ in 0..count {
        let address = store.cursor();
        let text = match kind {
            ValueKind::Bit => store.try_read_next::<bool>()?.to_string(),
            ValueKind::Int16 => store.try_read_next::<i16>()?.to_string(),
            ValueKind::Int32 => store.try_read_next::<i32>()?.to_string(),
            ValueKind::Float32 => store.try_read_next::<f32>()?.to_string(),
        };
        println!("{address:#06x}  {kind:<7}  {text}");
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_dump(path: &str, range: &Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let image = MmapEeprom::open(path)?;
    let range = match range {
        Some(range_str) => parse_range(range_str)?,
        None => 0..image.capacity(),
    };
    let end = range.end.min(image.capacity());

    for line_start in (range.start..end).step_by(16) {
        let line_end = (line_start + 16).min(end);
        let hex: Vec<String> = (line_start..line_end)
            .map(|address| format!("{:02x}", image.read_byte(address)))
            .collect();
        println!("{line_start:#06x}  {}", hex.join(" "));
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_validate(
    kind: RangeKind,
    min: &str,
    max: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let passed = match kind {
        RangeKind::Int16 => {
            validate_int(min.parse::<i16>()?, max.parse::<i16>()?, value.parse::<i16>()?)
        }
        RangeKind::Uint16 => validate_unsigned_int(
            min.parse::<u16>()?,
            max.parse::<u16>()?,
            value.parse::<u16>()?,
        ),
        RangeKind::Int32 => {
            validate_long(min.parse::<i32>()?, max.parse::<i32>()?, value.parse::<i32>()?)
        }
        RangeKind::Uint32 => validate_unsigned_long(
            min.parse::<u32>()?,
            max.parse::<u32>()?,
            value.parse::<u32>()?,
        ),
        RangeKind::Float32 => {
            validate_float(min.parse::<f32>()?, max.parse::<f32>()?, value.parse::<f32>()?)
        }
    };

    println!("{}", if passed { "valid" } else { "out of range" });
    if !passed {
        std::process::exit(2);
    }

    Ok(())
}

#[cfg(feature = "cli")]
#[derive(serde::Serialize)]
struct ImageInfo<'a> {
    path: &'a str,
    capacity: usize,
    erased_bytes: usize,
    store: StoreConfig,
    version: &'static str,
    version_code: u32,
}

#[cfg(feature = "cli")]
fn handle_info(
    path: &str,
    start: &str,
    len: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let image = MmapEeprom::open(path)?;
    let mut store = StoreConfig::at(parse_usize(start)?);
    if let Some(len) = len {
        store = store.with_region_len(parse_usize(len)?);
    }

    let info = ImageInfo {
        path,
        capacity: image.capacity(),
        erased_bytes: image
            .as_bytes()
            .iter()
            .filter(|&&byte| byte == ERASED_BYTE)
            .count(),
        store,
        version: VERSION,
        version_code: VERSION_CODE,
    };

    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

#[cfg(feature = "cli")]
fn parse_bit(text: &str) -> Result<bool, String> {
    match text {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(format!("invalid bit value: {text}")),
    }
}
