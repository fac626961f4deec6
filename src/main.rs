extern crate getopts;

use anyhow::Context;
use getopts::Options;
use std::{env, process};
use unique_int::unique_sorter_util::process_file;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} -i INPUT [options]", program);
    print!("{}", opts.usage(&brief));
    process::exit(0);
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "input", "set input file name", "NAME");
    opts.optopt("o", "output", "set output file name", "NAME");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            panic!("{}", f.to_string())
        }
    };
    if matches.opt_present("h") {
        print_usage(&program, &opts);
    }

    let input_file = if matches.opt_present("i") {
        matches.opt_str("i").unwrap()
    } else {
        print_usage(&program, &opts);
        return Ok(());
    };
    let output_file = matches
        .opt_str("o")
        .unwrap_or("unique_int_out.txt".to_string());

    process_file(&input_file, &output_file)
        .with_context(|| format!("processing {} into {}", input_file, output_file))?;
    eprintln!("Finished writing unique integers to {}", output_file);

    Ok(())
}
