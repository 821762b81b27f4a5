use std::{collections::HashSet, env, fs};

struct Board {
    numbers: Vec<Vec<u64>>,
}

impl Board {
    fn rows_and_columns(&self) -> impl Iterator<Item = Vec<u64>> + '_ {
        let rows = self.numbers.iter().cloned();
        let columns =
            (0..5usize).map(|column| self.numbers.iter().map(|row| row[column]).collect());

        rows.chain(columns)
    }

    fn is_winning(&self, drawn: &HashSet<u64>) -> bool {
        self.rows_and_columns()
            .any(|line| line.iter().all(|number| drawn.contains(number)))
    }

    fn score(&self, drawn: &HashSet<u64>, winning_draw: u64) -> u64 {
        let unmarked_sum: u64 = self
            .numbers
            .iter()
            .flatten()
            .filter(|number| !drawn.contains(number))
            .sum();

        unmarked_sum * winning_draw
    }
}

impl From<&str> for Board {
    fn from(data: &str) -> Self {
        let numbers: Vec<Vec<u64>> = data
            .split('\n')
            .map(|row| {
                row.split_ascii_whitespace()
                    .map(|number| number.parse().unwrap())
                    .collect()
            })
            .collect();

        assert_eq!(numbers.len(), 5);
        for row in numbers.iter() {
            assert_eq!(row.len(), 5);
        }

        Self { numbers }
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

    let input_data: Vec<&str> = content.trim_end().split("\n\n").collect();
    let draws: Vec<u64> = input_data[0]
        .split(',')
        .map(|x| x.parse().unwrap())
        .collect();
    let boards: Vec<Board> = input_data[1..].iter().copied().map(Board::from).collect();

    match part {
        "1" => {
            let result = solve_part1(&draws, &boards);
            println!("{}", result);
        }
        "2" => {
            let result = solve_part2(&draws, &boards);
            println!("{}", result);
        }
        _ => unreachable!("{}", part),
    }
}

fn solve_part1(draws: &[u64], boards: &[Board]) -> u64 {
    let mut drawn: HashSet<u64> = Default::default();

    for &draw in draws {
        drawn.insert(draw);
        for board in boards {
            if board.is_winning(&drawn) {
                return board.score(&drawn, draw);
            }
        }
    }

    unreachable!("no board ever wins")
}

fn solve_part2(draws: &[u64], boards: &[Board]) -> u64 {
    let mut drawn: HashSet<u64> = Default::default();
    let mut has_won = vec![false; boards.len()];
    let mut last_score = None;

    for &draw in draws {
        drawn.insert(draw);
        for (index, board) in boards.iter().enumerate() {
            if !has_won[index] && board.is_winning(&drawn) {
                has_won[index] = true;
                last_score = Some(board.score(&drawn, draw));
            }
        }
    }

    last_score.expect("no board ever wins")
}

#[cfg(test)]
mod tests {
    use crate::{solve_part1, solve_part2, Board};

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

    fn parse(input: &str) -> (Vec<u64>, Vec<Board>) {
        let blocks: Vec<&str> = input.split("\n\n").collect();
        let draws = blocks[0].split(',').map(|x| x.parse().unwrap()).collect();
        let boards = blocks[1..].iter().copied().map(Board::from).collect();
        (draws, boards)
    }

    #[test]
    fn part1_scores_the_first_winner() {
        let (draws, boards) = parse(EXAMPLE);
        assert_eq!(solve_part1(&draws, &boards), 4512);
    }

    #[test]
    fn part2_scores_the_last_winner() {
        let (draws, boards) = parse(EXAMPLE);
        assert_eq!(solve_part2(&draws, &boards), 1924);
    }
}
