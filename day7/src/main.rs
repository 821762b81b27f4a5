use std::{env, fs};

use itertools::Itertools;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part number");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file).unwrap();

    let input_data: Vec<u64> = content
        .trim_end()
        .split(',')
        .map(|x| x.parse().unwrap())
        .collect();

    match part {
        "1" => {
            let result = solve_part1(&input_data);
            println!("{}", result);
        }
        "2" => {
            let result = solve_part2(&input_data);
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }
}

// Triangular fuel cost: moving a distance of d burns 1 + 2 + ... + d.
fn gauss_sum(a: u64, b: u64) -> u64 {
    let distance = a.abs_diff(b);
    distance * (distance + 1) / 2
}

fn minimal_alignment_cost(positions: &[u64], cost: impl Fn(u64, u64) -> u64) -> u64 {
    let (lowest, highest) = positions
        .iter()
        .copied()
        .minmax()
        .into_option()
        .expect("at least one crab position");

    (lowest..=highest)
        .map(|candidate| positions.iter().map(|&position| cost(candidate, position)).sum())
        .min()
        .expect("candidate range is never empty")
}

fn solve_part1(data: &[u64]) -> u64 {
    minimal_alignment_cost(data, |a, b| a.abs_diff(b))
}

fn solve_part2(data: &[u64]) -> u64 {
    minimal_alignment_cost(data, gauss_sum)
}
