//! Account Forge - lucky account number valuation and generation
//!
//! CLI for pricing 9-digit account numbers by their lucky patterns and for
//! generating pattern-constrained candidates within a price band.

use std::env;
use std::process;

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use account_forge::{
    classify, generate_accounts, price_range_description, rarity_score, AccountForgeError,
    AccountGenerator, AccountType, GenerationRequest, PlacementFilter, ShowcaseFamily,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_help();
        return;
    }

    let result = match args[1].as_str() {
        "classify" => run_classify(&args[2..]),
        "generate" => run_generate(&args[2..]),
        "showcase" => run_showcase(&args[2..]),
        other => Err(anyhow!("unknown command: {}", other)),
    };

    if let Err(e) = result {
        match e.downcast_ref::<AccountForgeError>() {
            Some(forge_error) => eprintln!("{}", forge_error.user_message()),
            None => eprintln!("❌ Error: {}\n💡 Use --help for usage information", e),
        }
        process::exit(1);
    }
}

/// Price one specific account number
fn run_classify(args: &[String]) -> anyhow::Result<()> {
    let number = args
        .first()
        .ok_or_else(|| anyhow!("classify needs an account number"))?;

    let price = classify(number)?;

    println!("🔢 Account number: {}", number);
    println!("💰 Price: {}", price);
    println!("📊 Price range: {}", price_range_description(price));
    println!("⭐ Rarity: {}/10", rarity_score(number));

    Ok(())
}

/// Generate candidates around a pattern
fn run_generate(args: &[String]) -> anyhow::Result<()> {
    let mut pattern: Option<String> = None;
    let mut min_price = 0.0;
    let mut max_price = 10_000.0;
    let mut filter: Option<PlacementFilter> = None;
    let mut account_type: Option<AccountType> = None;
    let mut limit: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "--min" => {
                min_price = flag_value(args, &mut index, "--min")?
                    .parse()
                    .context("--min expects a number")?;
            }
            "--max" => {
                max_price = flag_value(args, &mut index, "--max")?
                    .parse()
                    .context("--max expects a number")?;
            }
            "--filter" => {
                let value = flag_value(args, &mut index, "--filter")?;
                filter = Some(value.parse().map_err(|e: String| anyhow!(e))?);
            }
            "--type" => {
                let value = flag_value(args, &mut index, "--type")?;
                account_type = Some(value.parse().map_err(|e: String| anyhow!(e))?);
            }
            "--count" => {
                limit = Some(
                    flag_value(args, &mut index, "--count")?
                        .parse()
                        .context("--count expects an integer")?,
                );
            }
            "--seed" => {
                seed = Some(
                    flag_value(args, &mut index, "--seed")?
                        .parse()
                        .context("--seed expects an integer")?,
                );
            }
            "--json" => json = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown flag: {}", other));
            }
            other => {
                if pattern.is_some() {
                    return Err(anyhow!("unexpected argument: {}", other));
                }
                pattern = Some(other.to_string());
            }
        }
        index += 1;
    }

    let pattern = pattern.ok_or_else(|| anyhow!("generate needs a digit pattern"))?;

    let request = GenerationRequest {
        pattern,
        min_price,
        max_price,
        filter,
        account_type,
        limit,
    };

    let mut generator = match seed {
        Some(seed) => AccountGenerator::from_seed(seed),
        None => AccountGenerator::new(),
    };
    let outcome = generate_accounts(&mut generator, &request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if outcome.candidates.is_empty() {
        println!("😔 No matching account numbers found. Try widening the price band!");
        return Ok(());
    }

    println!("🎨 Generated Account Numbers ({}):", outcome.realized_count);
    println!("═══════════════════════════════════");
    for (position, candidate) in outcome.candidates.iter().enumerate() {
        println!(
            "{:2}. {}  💰 {:<8}  📊 {}",
            position + 1,
            candidate.account_number,
            candidate.price,
            candidate.price_range
        );
    }

    Ok(())
}

/// Print one showcase number per pattern family
fn run_showcase(args: &[String]) -> anyhow::Result<()> {
    let mut generator = match args.first().map(String::as_str) {
        Some("--seed") => {
            let seed: u64 = args
                .get(1)
                .ok_or_else(|| anyhow!("--seed expects an integer"))?
                .parse()
                .context("--seed expects an integer")?;
            AccountGenerator::from_seed(seed)
        }
        Some(other) => return Err(anyhow!("unknown flag: {}", other)),
        None => AccountGenerator::new(),
    };

    println!("✨ Showcase Account Numbers:");
    println!("═══════════════════════════");
    for (label, family) in [
        ("Uniform group", ShowcaseFamily::UniformGroup),
        ("Lucky 168    ", ShowcaseFamily::Lucky168),
        ("Sequential   ", ShowcaseFamily::Sequential),
        ("Pairs        ", ShowcaseFamily::Pairs),
        ("Random       ", ShowcaseFamily::Random),
    ] {
        let number = generator.showcase(family);
        let price = account_forge::appraise(&number);
        println!("  {}  {}  💰 {}", label, number, price);
    }

    Ok(())
}

fn flag_value<'a>(args: &'a [String], index: &mut usize, flag: &str) -> anyhow::Result<&'a str> {
    *index += 1;
    args.get(*index)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} expects a value", flag))
}

/// Print help information
fn print_help() {
    println!("🍀 Account Forge - lucky account number valuation and generation");
    println!("════════════════════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    account-forge <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    classify <NUMBER>     Price a specific 9-digit account number");
    println!("    generate <PATTERN>    Generate candidates around a digit pattern");
    println!("    showcase              Print one example number per pattern family");
    println!();
    println!("GENERATE OPTIONS:");
    println!("    --min <PRICE>         Lowest acceptable price (default: 0)");
    println!("    --max <PRICE>         Highest acceptable price (default: 10000)");
    println!("    --filter <FILTER>     contains | starts_with | ends_with");
    println!("    --type <TYPE>         normal | casa | loan | fd_rd | dob | phone");
    println!("    --count <N>           Number of candidates to request (default: 10)");
    println!("    --seed <N>            Seed the random source for reproducible output");
    println!("    --json                Emit the outcome as JSON");
    println!();
    println!("EXAMPLES:");
    println!("    account-forge classify 168168168");
    println!("    account-forge generate 888 --min 100 --max 5000");
    println!("    account-forge generate 55 --type loan --filter starts_with --count 5");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}
