use std::{env, fs};

use anyhow::Context;
use rayon::prelude::*;

use crate::decode::{decode_entry, DecodeError, Entry};

mod decode;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part number");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file)?;

    let input_data: Vec<Entry> = content
        .trim_end()
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            line.parse()
                .with_context(|| format!("input line {}", index + 1))
        })
        .collect::<anyhow::Result<_>>()?;

    match part {
        "1" => {
            let result = solve_part1(&input_data);
            println!("{}", result);
        }
        "2" => {
            let result = solve_part2(&input_data).map_err(|err| {
                log::error!("decode failed: {}", err);
                err
            })?;
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }

    Ok(())
}

/// Codewords with 2, 3, 4, or 7 lit segments can only be the digits 1, 7, 4,
/// or 8, so counting them needs no resolution at all.
fn solve_part1(data: &[Entry]) -> usize {
    data.iter()
        .map(|entry| {
            entry
                .codewords
                .iter()
                .filter(|codeword| matches!(codeword.len(), 2 | 3 | 4 | 7))
                .count()
        })
        .sum()
}

/// Entries are independent, so each one runs the classify-resolve-decode
/// pipeline on its own and the decoded values fan in to a sum.
fn solve_part2(data: &[Entry]) -> Result<u64, DecodeError> {
    data.par_iter()
        .map(|entry| {
            let value = decode_entry(entry)?;
            log::debug!("decoded {} from {} codewords", value, entry.codewords.len());
            Ok(value)
        })
        .try_reduce(|| 0u64, |a, b| Ok(a + b))
}
