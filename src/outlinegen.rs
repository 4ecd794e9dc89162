use anyhow::Result;
use lectree::{save_outline, DemoOutlineBuilder};
use std::env;

struct Config {
    seed: u64,
    max_depth: usize,
    max_children: usize,
    output_file: Option<String>,
    use_brotli: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 42,
            max_depth: 3,
            max_children: 5,
            output_file: None,
            use_brotli: false,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-depth" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-depth requires an argument");
                }
                config.max_depth = args[i].parse()?;
            }
            "-children" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-children requires an argument");
                }
                config.max_children = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-brotli" => {
                config.use_brotli = true;
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Demo Course Outline Generator");
    println!("Usage: lectree-outlinegen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -depth <N>             Maximum outline depth (default: 3)");
    println!("  -children <N>          Maximum children per group (default: 5)");
    println!("  -out <FILE>            Output file path (default: outline.json)");
    println!("  -brotli                Write compressed payload using Brotli (output: *.json.br)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config.output_file.clone().unwrap_or_else(|| {
        if config.use_brotli {
            "outline.json.br".to_string()
        } else {
            "outline.json".to_string()
        }
    });

    let outline =
        DemoOutlineBuilder::with_config(config.max_depth, config.max_children, config.seed).build();

    save_outline(&outline, &output_path)?;

    println!("Outline written to: {}", output_path);
    println!(
        "Roots: {} | Lectures: {} | Nodes: {} | Depth: {}",
        outline.roots.len(),
        outline.leaf_count(),
        outline.node_count(),
        outline.max_depth()
    );

    Ok(())
}
