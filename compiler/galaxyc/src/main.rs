//! Galaxy Compiler CLI

use galaxyc::commands::{compile_command, explain_error, CompileMode};

fn main() {
    galaxyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Galaxy Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: galaxy explain <ERROR_CODE>");
                eprintln!("Example: galaxy explain G0006");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        _ => {
            let Some(mode) = CompileMode::parse(command) else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(2);
            };
            if args.len() < 3 {
                eprintln!("Usage: galaxy {} <text> [options]", mode.as_str());
                std::process::exit(1);
            }
            compile_command(mode, &args[2..]);
        }
    }
}

fn print_usage() {
    println!("Galaxy Compiler");
    println!();
    println!("Usage: galaxy <command> [options]");
    println!();
    println!("Commands:");
    println!("  template <text>      Compile template text with {{{{ }}}} interpolations");
    println!("  expr <text>          Compile an expression, filters allowed");
    println!("  event <text>         Compile an event handler, #methods allowed");
    println!("  explain <code>       Explain an error code (e.g., G0006)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Compile options:");
    println!("  --template-pragma=<name>  Function wrapping interpolations (default: __$n)");
    println!("  --filter-pragma=<name>    Function applying filters (default: $filter)");
    println!("  --method-pragma=<name>    Function invoking #methods (default: $commit)");
    println!();
    println!("Examples:");
    println!("  galaxy template 'Hello, {{{{ name |> upper }}}}!'");
    println!("  galaxy expr 'price |> currency(\"EUR\")'");
    println!("  galaxy event '#save(item)'");
    println!("  galaxy explain G0001");
    println!("  RUST_LOG=galaxy_rewrite=trace galaxy expr 'a |> b'");
}
