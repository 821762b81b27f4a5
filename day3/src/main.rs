use std::{cmp::Ordering, env, fs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gas {
    Oxygen,
    Co2,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part number");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file).unwrap();

    let input_data: Vec<&str> = content.trim_end().split('\n').collect();

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

// Ties count '1' as most common and '0' as least common.
fn most_and_least_common_bit(lines: &[&str], position: usize) -> (u8, u8) {
    let ones = lines
        .iter()
        .filter(|line| line.as_bytes()[position] == b'1')
        .count();
    let zeros = lines.len() - ones;

    match ones.cmp(&zeros) {
        Ordering::Greater | Ordering::Equal => (b'1', b'0'),
        Ordering::Less => (b'0', b'1'),
    }
}

fn solve_part1(data: &[&str]) -> u64 {
    let mut gamma = 0u64;
    let mut epsilon = 0u64;

    for position in 0..data[0].len() {
        let (most_common, _) = most_and_least_common_bit(data, position);

        gamma <<= 1;
        epsilon <<= 1;
        if most_common == b'1' {
            gamma += 1;
        } else {
            epsilon += 1;
        }
    }

    gamma * epsilon
}

fn find_rating(data: &[&str], gas: Gas) -> u64 {
    let mut lines: Vec<&str> = data.to_vec();
    let mut position = 0;

    while lines.len() > 1 {
        let (most_common, least_common) = most_and_least_common_bit(&lines, position);
        let criteria = match gas {
            Gas::Oxygen => most_common,
            Gas::Co2 => least_common,
        };

        lines.retain(|line| line.as_bytes()[position] == criteria);
        position += 1;
    }

    u64::from_str_radix(lines[0], 2).unwrap()
}

fn solve_part2(data: &[&str]) -> u64 {
    find_rating(data, Gas::Oxygen) * find_rating(data, Gas::Co2)
}

#[cfg(test)]
mod tests {
    use crate::{find_rating, solve_part1, solve_part2, Gas};

    const EXAMPLE: [&str; 12] = [
        "00100", "11110", "10110", "10111", "10101", "01111", "00111", "11100", "10000", "11001",
        "00010", "01010",
    ];

    #[test]
    fn part1_multiplies_gamma_and_epsilon() {
        assert_eq!(solve_part1(&EXAMPLE), 198);
    }

    #[test]
    fn ratings_filter_down_to_one_line() {
        assert_eq!(find_rating(&EXAMPLE, Gas::Oxygen), 23);
        assert_eq!(find_rating(&EXAMPLE, Gas::Co2), 10);
    }

    #[test]
    fn part2_multiplies_oxygen_and_co2() {
        assert_eq!(solve_part2(&EXAMPLE), 230);
    }
}
