use byte_value::{BitInput, BitPosition, ByteValue, Error, Operand};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, info};
use strum::IntoEnumIterator;

/// Inspect and combine 8-bit values bit by bit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bit, integer, character and boolean views of a byte
    Show {
        input: String,

        /// How to read the input
        #[arg(short, long, value_enum, default_value_t = InputKind::Int)]
        kind: InputKind,

        /// Character offset for binary strings
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
    },

    /// Add two values
    Add {
        lhs: String,
        rhs: String,

        #[arg(long, value_enum, default_value_t = InputKind::Int)]
        lhs_kind: InputKind,

        /// How to read the right-hand side
        #[arg(long, value_enum, default_value_t = InputKind::Int)]
        rhs_kind: InputKind,
    },

    /// Read a single bit
    Get {
        input: String,
        index: usize,

        #[arg(short, long, value_enum, default_value_t = InputKind::Int)]
        kind: InputKind,
    },

    /// Assign a single bit and print the result
    Set {
        input: String,
        index: usize,

        /// `true`/`false`, an integer (0 clears) or text (`0` clears)
        value: String,

        #[arg(short, long, value_enum, default_value_t = InputKind::Int)]
        kind: InputKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputKind {
    /// Decimal integer, truncated to 8 bits
    Int,
    /// Binary digits, least significant bit first
    Bits,
    /// A single character
    Char,
}

fn parse_byte(input: &str, kind: InputKind, offset: usize) -> byte_value::Result<ByteValue> {
    let byte = match kind {
        InputKind::Int => {
            let number = input
                .trim()
                .parse::<i128>()
                .map_err(|_| Error::from_input(input))?;
            ByteValue::from_int(number)
        }
        InputKind::Bits => ByteValue::from_bits_str_at(input, offset),
        InputKind::Char => ByteValue::from_char_str(input)?,
    };
    debug!("parsed {:?} as {:?}: {}", input, kind, byte);
    Ok(byte)
}

fn parse_operand(input: &str, kind: InputKind) -> byte_value::Result<Operand<'_>> {
    let operand = match kind {
        InputKind::Int => Operand::Int(
            input
                .trim()
                .parse::<i128>()
                .map_err(|_| Error::from_input(input))?,
        ),
        InputKind::Bits => Operand::from(input),
        InputKind::Char => Operand::Byte(ByteValue::from_char_str(input)?),
    };
    Ok(operand)
}

fn parse_bit_input(value: &str) -> BitInput<'_> {
    if let Ok(flag) = value.parse::<bool>() {
        BitInput::Bool(flag)
    } else if let Ok(number) = value.parse::<i64>() {
        BitInput::Int(number)
    } else {
        BitInput::Text(value)
    }
}

fn print_views(byte: &ByteValue) {
    println!("bits  {}", byte);
    println!("int   {}", byte.value());
    println!("char  {:?}", byte.as_char());
    println!("bool  {}", byte.as_bool());
    let weights: Vec<String> = BitPosition::iter()
        .filter(|position| byte.bit(*position))
        .map(|position| position.weight().to_string())
        .collect();
    if !weights.is_empty() {
        println!("sum   {}", weights.join(" + "));
    }
}

fn run(args: Args) -> byte_value::Result<()> {
    match args.command {
        Command::Show {
            input,
            kind,
            offset,
        } => {
            let byte = parse_byte(&input, kind, offset)?;
            print_views(&byte);
        }
        Command::Add {
            lhs,
            rhs,
            lhs_kind,
            rhs_kind,
        } => {
            let lhs = parse_byte(&lhs, lhs_kind, 0)?;
            let rhs = parse_operand(&rhs, rhs_kind)?;
            let sum = lhs.add_operand(rhs)?;
            info!("{} + {:?} = {}", lhs, rhs_kind, sum);
            print_views(&sum);
        }
        Command::Get { input, index, kind } => {
            let byte = parse_byte(&input, kind, 0)?;
            println!("{}", byte.get_int(index)?);
        }
        Command::Set {
            input,
            index,
            value,
            kind,
        } => {
            let mut byte = parse_byte(&input, kind, 0)?;
            byte.set(index, parse_bit_input(&value))?;
            print_views(&byte);
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    run(args).map_err(|e| e.to_string())
}
