use std::{env, fs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Forward(u64),
    Up(u64),
    Down(u64),
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        let (direction, distance) = line.split_once(' ').unwrap();
        let distance: u64 = distance.parse().unwrap();

        match direction {
            "forward" => Self::Forward(distance),
            "up" => Self::Up(distance),
            "down" => Self::Down(distance),
            _ => unreachable!("unknown command: {}", direction),
        }
    }
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

    let input_data: Vec<Command> = content.trim_end().split('\n').map(Command::from).collect();

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

fn solve_part1(data: &[Command]) -> u64 {
    let mut position = 0;
    let mut depth = 0;

    for command in data.iter() {
        match command {
            Command::Forward(distance) => position += distance,
            Command::Up(distance) => depth -= distance,
            Command::Down(distance) => depth += distance,
        }
    }

    position * depth
}

fn solve_part2(data: &[Command]) -> u64 {
    let mut position = 0;
    let mut depth = 0;
    let mut aim = 0;

    for command in data.iter() {
        match command {
            Command::Forward(distance) => {
                position += distance;
                depth += aim * distance;
            }
            Command::Up(distance) => aim -= distance,
            Command::Down(distance) => aim += distance,
        }
    }

    position * depth
}
