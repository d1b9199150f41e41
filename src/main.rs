use io::Write;
use std::{
    fs,
    io::{self, Read},
};

use clap::{App, Arg, ArgMatches};
use mini::frontend::{lexer::Lexer, parser::Parser, printer};

fn main() {
    let matches = App::new("mini")
        .version("0.1.0")
        .about("A compiler front end for the Mini programming language written in Rust.")
        .arg(
            Arg::new("parse")
                .value_name("FILE")
                .short('c')
                .help("Path to the Mini file that will be parsed.")
                .takes_value(true),
        )
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .help("Output the token listing. Useful for debugging.")
                .takes_value(false),
        )
        .arg(
            Arg::new("ast")
                .short('a')
                .long("ast")
                .help("Output the parsed AST as an indented tree.")
                .takes_value(false),
        )
        .get_matches();

    match matches.value_of("parse") {
        Some(_) => Runner::run_with_mode(RunMode::File, &matches)
            .unwrap_or_else(|err| eprintln!("{}: {}", err, matches.value_of("parse").unwrap())),
        None => Runner::run_with_mode(RunMode::Prompt, &matches)
            .unwrap_or_else(|err| eprintln!("{}", err)),
    };
}

/// Indicate whether the front end shall be run on a Mini source file or
/// as an interactive prompt.
enum RunMode {
    Prompt,
    File,
}

/// Simple struct responsible for coordinating the execution of either the
/// prompt or a Mini file.
struct Runner<'a> {
    mode: RunMode,
    args: &'a ArgMatches,
}

impl<'a> Runner<'a> {
    pub fn run_with_mode(mode: RunMode, args: &'a ArgMatches) -> Result<(), io::Error> {
        let runner = Self { mode, args };
        match runner.mode {
            RunMode::File => {
                let src = runner.load_source_file()?;
                runner.run(&src);
            }
            RunMode::Prompt => runner.run_prompt()?,
        }
        Ok(())
    }

    /// Helper function for getting the content of a file.
    fn load_source_file(&self) -> Result<String, io::Error> {
        let path = self.args.value_of("parse").unwrap();
        let mut file = fs::File::open(path)?;
        let mut src = String::new();
        file.read_to_string(&mut src)?;
        Ok(src)
    }

    /// Starts a prompt used for checking single declarations
    /// interactively.
    fn run_prompt(&self) -> Result<(), io::Error> {
        let mut inpt = String::new();
        println!(
            "mini 0.1.0\
            \nA compiler front end for the Mini programming language written in Rust.\
            \nPress ctrl+d or ctrl+c to exit."
        );
        loop {
            print!("> ");
            io::stdout().flush()?;
            let num_bytes = io::stdin().read_line(&mut inpt)?;
            let line = inpt.trim_end();
            if num_bytes == 0 {
                // Terminate line
                println!();
                return Ok(());
            }
            self.run(line);
            inpt.clear();
        }
    }

    /// Tokenizes and parses a Mini program represented as a string,
    /// reporting errors and the requested dumps.
    pub fn run(&self, src: &str) {
        let tokens = match Lexer::new(src).tokenize() {
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
            Ok(tokens) => tokens,
        };
        if self.args.is_present("tokens") {
            print!("{}", printer::render_tokens(&tokens));
        }
        match Parser::new(tokens).parse() {
            Err(e) => eprintln!("{}", e),
            Ok(program) => {
                println!("Parsed OK. decls={}", program.declarations.len());
                if self.args.is_present("ast") {
                    print!("{}", printer::render_ast(&program));
                }
            }
        }
    }
}
