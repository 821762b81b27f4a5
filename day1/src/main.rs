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
        .split('\n')
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

fn solve_part1(data: &[u64]) -> usize {
    data.iter().tuple_windows().filter(|(a, b)| b > a).count()
}

fn solve_part2(data: &[u64]) -> usize {
    // Summing the 3-wide windows reduces part 2 to part 1.
    let window_sums: Vec<u64> = data
        .iter()
        .tuple_windows()
        .map(|(a, b, c)| a + b + c)
        .collect();

    solve_part1(&window_sums)
}
