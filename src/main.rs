use clap::{App, Arg};
use leafmeet::{meeting::shortest_leaf_cycle, reader::TokenReader, tree::read_tree};
use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn run<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<(), Box<dyn Error>> {
    let n = match tokens.value::<usize>() {
        Ok(n) => n,
        Err(_) => return Ok(()),
    };
    let tree = read_tree(tokens, n)?;
    debug!("{}", tree);
    println!("{}", shortest_leaf_cycle(&tree).unwrap_or(0));
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new("leafmeet")
        .about("Shortest cycle obtainable by joining two leaves of a tree")
        .arg(Arg::with_name("INPUT").help("File with the tree description (stdin when absent)"))
        .get_matches();
    match matches.value_of("INPUT") {
        Some(path) => run(&mut TokenReader::new(BufReader::new(File::open(path)?))),
        None => {
            let stdin = io::stdin();
            run(&mut TokenReader::new(stdin.lock()))
        }
    }
}
