use std::{env, fs};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut reversed_args: Vec<_> = args.iter().map(|x| x.as_str()).rev().collect();

    reversed_args
        .pop()
        .expect("Expected the executable name to be the first argument, but was missing");

    let part = reversed_args.pop().expect("part number");
    let input_file = reversed_args.pop().expect("input file");
    let content = fs::read_to_string(input_file).unwrap();

    let input_data: Vec<usize> = content
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

fn simulate_lanternfish(timers: &[usize], total_days: usize) -> usize {
    // One bucket per timer value; the population only ever moves between them.
    let mut buckets = [0usize; 9];
    for timer in timers {
        buckets[*timer] += 1;
    }

    for _day in 0..total_days {
        let spawning = buckets[0];

        // Every timer ticks down; the spawning fish wrap around to 8
        // as their newborns, and re-enter the queue at 6 themselves.
        buckets.rotate_left(1);
        buckets[6] += spawning;
    }

    buckets.iter().sum()
}

fn solve_part1(data: &[usize]) -> usize {
    simulate_lanternfish(data, 80)
}

fn solve_part2(data: &[usize]) -> usize {
    simulate_lanternfish(data, 256)
}

#[cfg(test)]
mod tests {
    use crate::{simulate_lanternfish, solve_part1, solve_part2};

    const EXAMPLE: [usize; 5] = [3, 4, 3, 1, 2];

    #[test]
    fn population_after_18_days() {
        assert_eq!(simulate_lanternfish(&EXAMPLE, 18), 26);
    }

    #[test]
    fn part1_runs_80_days() {
        assert_eq!(solve_part1(&EXAMPLE), 5934);
    }

    #[test]
    fn part2_runs_256_days() {
        assert_eq!(solve_part2(&EXAMPLE), 26984457539);
    }
}
