use std::path::Path;

use clap::Parser;
use quill::{Interpreter, config::Config, loader::FsLoader};
use tracing_subscriber::EnvFilter;

/// quill is a small scripting language with first-class functions, shared
/// tables and explicit reference assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to treat the contents as a path to a script file. Imports
    /// are then resolved relative to that file's directory.
    #[arg(short, long)]
    file: bool,

    /// Prints the root bindings after a successful run.
    #[arg(short, long)]
    print_scope: bool,

    /// Longest accepted token, in characters.
    #[arg(long)]
    max_lexeme_len: Option<usize>,

    /// Deepest accepted chain of active function calls.
    #[arg(long)]
    max_call_depth: Option<usize>,

    /// Deepest accepted nesting of expressions and blocks.
    #[arg(long)]
    max_nesting_depth: Option<usize>,

    contents: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let defaults = Config::default();
    let config =
        Config { max_lexeme_len:    args.max_lexeme_len.unwrap_or(defaults.max_lexeme_len),
                 max_call_depth:    args.max_call_depth.unwrap_or(defaults.max_call_depth),
                 max_nesting_depth: args.max_nesting_depth.unwrap_or(defaults.max_nesting_depth), };

    let mut interpreter = Interpreter::with_config(config);

    let result = if args.file {
        let path = Path::new(&args.contents);
        let Some(name) = path.file_name() else {
            eprintln!("'{}' does not name a script file.", &args.contents);
            std::process::exit(1);
        };
        let base_dir = path.parent()
                           .filter(|dir| !dir.as_os_str().is_empty())
                           .unwrap_or_else(|| Path::new("."));

        interpreter = interpreter.with_loader(FsLoader::new(base_dir));
        interpreter.run_file(&name.to_string_lossy())
    } else {
        interpreter.run(&args.contents)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if args.print_scope {
        for (name, value) in interpreter.bindings() {
            println!("{name} = {value}");
        }
    }
}
