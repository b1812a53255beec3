use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use coset_math::{Gf2, Matrix};
use coset_table::CosetLeader;
use log::{info, warn};
use rand::Rng;

#[derive(Parser)]
#[command(about = "Coset-leader table for a rate-1/2 binary block code")]
struct Cli {
    /// Rows of the parity submatrix h, comma separated.
    #[arg(long, default_value = "100,110,011")] submatrix: String,
    /// M-bit message to encode, corrupt and decode.
    #[arg(long)] message: Option<String>,
    /// Codeword bit to flip before decoding. Repeatable.
    #[arg(long)] flip: Vec<usize>,
    /// Additional random bit flips.
    #[arg(long, default_value_t = 0)] random_flips: usize,
    #[arg(long)] no_cosets: bool,
}

fn parse_bits(s: &str) -> anyhow::Result<Vec<Gf2>> {
    s.trim()
        .chars()
        .map(|c| -> anyhow::Result<Gf2> {
            let digit = c.to_digit(10).with_context(|| format!("'{}' is not a bit", c))?;
            Ok(Gf2::new(digit as u8)?)
        })
        .collect()
}

fn parse_submatrix(s: &str) -> anyhow::Result<Matrix<Gf2>> {
    let rows = s
        .split(',')
        .map(parse_bits)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Matrix::from_rows(rows)?)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let h = parse_submatrix(&cli.submatrix).context("bad --submatrix")?;
    let code = CosetLeader::new(&h)?;
    info!(
        "Code: M = {}, N = {}, d_min = {:?}",
        code.message_len(),
        code.block_len(),
        code.min_distance()
    );

    println!("{}", "Parity-check matrix H".bold());
    println!("{}\n", code.parity_check_matrix());
    println!("{}", "Codewords".bold());
    println!("{}\n", code.codewords());
    println!("{}", "Coset leaders".bold());
    println!("{}\n", code.coset_leaders());

    if !cli.no_cosets {
        println!("{}", "Coset table".bold());
        for coset in code.coset_table() {
            let line: Vec<String> = coset
                .iter_rows()
                .map(|r| Matrix::row_vector(r).to_string())
                .collect();
            println!("{}", line.join(" "));
        }
        println!();
    }

    let Some(bits) = cli.message else { return Ok(()) };

    let msg = Matrix::row_vector(&parse_bits(&bits).context("bad --message")?);
    let codeword = code.encode(&msg)?;

    let mut positions = cli.flip;
    let mut rng = rand::thread_rng();
    for _ in 0..cli.random_flips {
        positions.push(rng.gen_range(0..code.block_len()));
    }

    let mut received = codeword.clone();
    for pos in positions {
        let bit = received
            .get(0, pos)
            .with_context(|| format!("flip position {} outside 0..{}", pos, code.block_len()))?;
        received.set(0, pos, bit + Gf2::ONE)?;
    }

    let syndrome = code.syndrome(&received)?;
    let decoded = code.decode(&received)?;

    println!("message   {}", msg);
    println!("codeword  {}", codeword);
    println!("received  {}", received);
    println!("syndrome  {}", syndrome);
    if decoded == msg {
        println!("decoded   {}", decoded.to_string().green());
    } else {
        warn!("Decoded message differs from the one sent");
        println!("decoded   {}", decoded.to_string().red());
    }
    Ok(())
}
