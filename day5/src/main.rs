use std::{collections::HashMap, env, fs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Point {
    pub x: u64,
    pub y: u64,
}

impl From<&str> for Point {
    fn from(value: &str) -> Self {
        let (x, y) = value
            .trim()
            .split_once(',')
            .map(|(a, b)| (a.parse().unwrap(), b.parse().unwrap()))
            .unwrap();

        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Line {
    // start is tuple-wise earlier than end
    pub start: Point,
    pub end: Point,
}

impl Line {
    fn new(a: Point, b: Point) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    fn is_x_aligned(&self) -> bool {
        self.start.y == self.end.y
    }

    fn is_y_aligned(&self) -> bool {
        self.start.x == self.end.x
    }

    fn points(&self) -> Vec<Point> {
        if self.is_x_aligned() {
            (self.start.x..=self.end.x)
                .map(|x| Point { x, y: self.start.y })
                .collect()
        } else if self.is_y_aligned() {
            (self.start.y..=self.end.y)
                .map(|y| Point { x: self.start.x, y })
                .collect()
        } else {
            // Diagonal lines are ignored in part 1.
            Vec::new()
        }
    }
}

impl From<&str> for Line {
    fn from(value: &str) -> Self {
        let (first, second) = value.split_once("->").unwrap();

        Self::new(first.into(), second.into())
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

    let input_data: Vec<Line> = content.trim_end().split('\n').map(Line::from).collect();

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

fn solve_part1(data: &[Line]) -> usize {
    let mut covered: HashMap<Point, usize> = Default::default();

    for line in data {
        for point in line.points() {
            covered.entry(point).and_modify(|x| *x += 1).or_insert(1);
        }
    }

    covered.values().filter(|count| **count > 1).count()
}

#[allow(unused_variables)]
fn solve_part2(data: &[Line]) -> usize {
    todo!()
}
