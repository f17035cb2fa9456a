use crate::io::Io;
use derive_more::{Display, Error};
use lib::chess::{Board, Color, InvalidSquareName, Square};
use std::io::{self, ErrorKind, Read, Write};
use std::ops::ControlFlow::{self, Break, Continue};
use std::{fmt::Display as Show, str::FromStr};
use tracing::{debug, info, instrument};

/// The game was abandoned by one of the players.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "game over man, game over!")]
pub struct GameAborted;

/// The replies that abandon the game.
const CANCEL: [&str; 4] = ["quit", "exit", "cancel", "escape"];

/// A player's reply to a prompt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Answer {
    Square(Square),
    Cancel,
}

impl FromStr for Answer {
    type Err = InvalidSquareName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if CANCEL.contains(&&*s.trim().to_ascii_lowercase()) {
            Ok(Answer::Cancel)
        } else {
            Ok(Answer::Square(s.parse()?))
        }
    }
}

/// Holds the state of a game of chess.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Sets up the pieces, `turn` moves first.
    pub fn new(turn: Color) -> Self {
        Game {
            board: Board::default(),
            turn,
        }
    }

    /// The current state of the [`Board`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Alternates turns until one of the players abandons the game.
    #[instrument(level = "debug", skip_all, err)]
    pub fn play<W: Write, R: Read>(&mut self, io: &mut Io<W, R>) -> io::Result<GameAborted> {
        loop {
            if let Break(aborted) = self.half_move(io)? {
                info!(%aborted);
                break Ok(aborted);
            }
        }
    }

    #[instrument(level = "debug", skip_all, err, fields(turn = %self.turn))]
    fn half_move<W: Write, R: Read>(
        &mut self,
        io: &mut Io<W, R>,
    ) -> io::Result<ControlFlow<GameAborted>> {
        io.send(self.board())?;

        let Continue(whence) = self.select_source(io)? else {
            return Ok(Break(GameAborted));
        };

        let Continue(whither) = self.select_destination(io, whence)? else {
            return Ok(Break(GameAborted));
        };

        let captured = self.board.apply_move(whence, whither);
        info!(turn = %self.turn(), %whence, %whither, captured = %captured, "move played");
        self.turn = !self.turn;

        Ok(Continue(()))
    }

    fn select_source<W: Write, R: Read>(
        &self,
        io: &mut Io<W, R>,
    ) -> io::Result<ControlFlow<GameAborted, Square>> {
        let mut reason = String::new();

        loop {
            let prompt = format!("{reason}{}'s turn! Pick a piece to move", self.turn());
            reason = match request(io, prompt)? {
                Break(aborted) => break Ok(Break(aborted)),
                Continue(None) => "Invalid square name! ".into(),
                Continue(Some(whence)) => match self.board().can_select(self.turn(), whence) {
                    Ok(()) => break Ok(Continue(whence)),
                    Err(e) => format!("Try again, {e}! "),
                },
            };
        }
    }

    fn select_destination<W: Write, R: Read>(
        &self,
        io: &mut Io<W, R>,
        whence: Square,
    ) -> io::Result<ControlFlow<GameAborted, Square>> {
        let mut reason = String::new();

        loop {
            let prompt = format!("{reason}{}'s turn! Pick a square to move to", self.turn());
            reason = match request(io, prompt)? {
                Break(aborted) => break Ok(Break(aborted)),
                Continue(None) => "Invalid square name! ".into(),
                Continue(Some(whither)) => {
                    match self.board().can_move(self.turn(), whence, whither) {
                        Ok(()) => break Ok(Continue(whither)),
                        Err(e) => format!("Try again, {e}! "),
                    }
                }
            };
        }
    }
}

/// Prompts for a [`Square`], or `None` if the reply doesn't name one.
///
/// Running out of input abandons the game just like replying with one of [`CANCEL`].
/// Replies that aren't valid UTF-8 name no square.
fn request<W: Write, R: Read, P: Show>(
    io: &mut Io<W, R>,
    prompt: P,
) -> io::Result<ControlFlow<GameAborted, Option<Square>>> {
    let reply = match io.ask(prompt) {
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(Break(GameAborted)),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            debug!(%e);
            return Ok(Continue(None));
        }
        reply => reply?,
    };

    match reply.parse() {
        Ok(Answer::Cancel) => Ok(Break(GameAborted)),
        Ok(Answer::Square(sq)) => Ok(Continue(Some(sq))),
        Err(e) => {
            debug!(%e);
            Ok(Continue(None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{Piece, Role};
    use lib::util::Integer;
    use proptest::{prelude::*, sample::select};
    use test_strategy::proptest;

    fn color() -> impl Strategy<Value = Color> {
        select(vec![Color::White, Color::Black])
    }

    fn play<I: AsRef<[u8]>>(game: &mut Game, input: I) -> (io::Result<GameAborted>, String) {
        let mut output = Vec::new();
        let mut io = Io::new(&mut output, input.as_ref());
        let result = game.play(&mut io);
        drop(io);
        (result, String::from_utf8(output).unwrap())
    }

    #[proptest]
    fn cancel_keywords_are_case_insensitive(
        #[strategy(select(CANCEL.to_vec()))] keyword: &'static str,
        upper: bool,
    ) {
        let s = if upper { keyword.to_uppercase() } else { keyword.to_string() };
        assert_eq!(s.parse(), Ok(Answer::Cancel));
        assert_eq!(format!(" {s}\t").parse(), Ok(Answer::Cancel));
    }

    #[proptest]
    fn square_names_are_answers(#[strategy(select(Vec::from_iter(Square::iter())))] sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(Answer::Square(sq)));
    }

    #[proptest]
    fn answer_fails_if_neither_square_nor_cancel_keyword(
        #[filter(#s.parse::<Square>().is_err() && !CANCEL.contains(&&*#s.trim().to_ascii_lowercase()))]
        s: String,
    ) {
        assert_eq!(s.parse::<Answer>(), Err(InvalidSquareName(s.clone())));
    }

    #[proptest]
    fn game_starts_from_the_standard_layout(#[strategy(color())] c: Color) {
        let game = Game::new(c);
        assert_eq!(game.turn(), c);
        assert_eq!(game.board(), &Board::default());
    }

    #[proptest]
    fn cancelling_when_selecting_source_leaves_board_untouched(
        #[strategy(color())] c: Color,
        #[strategy(select(CANCEL.to_vec()))] keyword: &'static str,
    ) {
        let mut game = Game::new(c);
        let (result, _) = play(&mut game, &format!("{keyword}\n"));
        assert_eq!(result?, GameAborted);
        assert_eq!(game, Game::new(c));
    }

    #[proptest]
    fn cancelling_when_selecting_destination_leaves_board_untouched(
        #[strategy(select(CANCEL.to_vec()))] keyword: &'static str,
    ) {
        let mut game = Game::new(Color::Black);
        let (result, _) = play(&mut game, &format!("b8\n{keyword}\n"));
        assert_eq!(result?, GameAborted);
        assert_eq!(game, Game::new(Color::Black));
    }

    #[proptest]
    fn running_out_of_input_aborts_the_game(#[strategy(color())] c: Color) {
        let mut game = Game::new(c);
        let (result, _) = play(&mut game, "");
        assert_eq!(result?, GameAborted);
        assert_eq!(game, Game::new(c));
    }

    #[test]
    fn board_is_displayed_before_prompting_for_a_move() {
        let mut game = Game::new(Color::White);
        let (_, output) = play(&mut game, "quit\n");
        let board = Board::default().to_string();
        assert!(output.starts_with(&board));
        assert!(output.ends_with("white's turn! Pick a piece to move > "));
    }

    #[test]
    fn players_take_turns() {
        let mut game = Game::new(Color::White);
        let (result, output) = play(&mut game, "e2\ne4\ne7\ne5\ng1\nf3\nquit\n");

        assert_eq!(result.unwrap(), GameAborted);
        assert_eq!(game.turn(), Color::Black);
        assert!(game.board()[Square::E2].is_empty());
        assert!(game.board()[Square::E7].is_empty());
        assert!(game.board()[Square::G1].is_empty());
        assert_eq!(game.board()[Square::F3].role(), Role::Knight);
        assert_eq!(output.matches("white's turn! Pick a piece to move").count(), 2);
        assert_eq!(output.matches("black's turn! Pick a piece to move").count(), 2);
    }

    #[test]
    fn invalid_square_name_prompts_again() {
        let mut game = Game::new(Color::White);
        let (result, output) = play(&mut game, "z9\ne2\nhello\ne4\nquit\n");

        assert_eq!(result.unwrap(), GameAborted);
        assert!(output.contains("Invalid square name! white's turn! Pick a piece to move"));
        assert!(output.contains("Invalid square name! white's turn! Pick a square to move to"));
        assert_eq!(game.board()[Square::E4].role(), Role::Pawn);
        assert_eq!(game.board()[Square::E4].origin(), Square::E2);
    }

    #[test]
    fn reply_that_is_not_utf8_prompts_again() {
        let mut game = Game::new(Color::White);
        let (result, output) = play(&mut game, b"\xff\xfe\ne2\n\xc3\ne4\nquit\n");

        assert_eq!(result.unwrap(), GameAborted);
        assert!(output.contains("Invalid square name! white's turn! Pick a piece to move"));
        assert!(output.contains("Invalid square name! white's turn! Pick a square to move to"));
        assert_eq!(game.board()[Square::E4].origin(), Square::E2);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn selecting_opponent_piece_prompts_again() {
        let mut game = Game::new(Color::White);
        let (_, output) = play(&mut game, "e7\nquit\n");
        assert!(output.contains("Try again, that wasn't your piece! white's turn!"));
    }

    #[test]
    fn selecting_empty_square_prompts_again() {
        let mut game = Game::new(Color::Black);
        let (_, output) = play(&mut game, "e4\nquit\n");
        assert!(output.contains("Try again, that wasn't your piece! black's turn!"));
    }

    #[test]
    fn selecting_immobile_piece_prompts_again() {
        let mut game = Game::new(Color::White);
        let (_, output) = play(&mut game, "a1\nquit\n");
        assert!(output.contains("Try again, no possible moves for that piece! white's turn!"));
    }

    #[test]
    fn blocked_pawn_is_immobile() {
        let mut game = Game::new(Color::White);
        let (_, output) = play(&mut game, "e2\ne4\ne7\ne5\ne4\nquit\n");

        assert_eq!(game.turn(), Color::White);
        assert!(output.contains("Try again, no possible moves for that piece! white's turn!"));
    }

    #[test]
    fn illegal_destination_prompts_again() {
        let mut game = Game::new(Color::White);
        let (_, output) = play(&mut game, "e2\ne5\nd2\ne4\nquit\n");

        assert!(output.contains("Try again, that move wasn't legal! white's turn!"));
        assert!(output.contains("Try again, your piece is there! white's turn!"));
        assert_eq!(game.board()[Square::E4].color(), Some(Color::White));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn captured_piece_is_removed_from_the_board() {
        let mut game = Game::new(Color::White);
        let input = "e2\ne4\nd7\nd5\ne4\nd5\nquit\n";
        let (_, output) = play(&mut game, input);

        assert!(!output.contains("Try again"));
        assert_eq!(game.board()[Square::D5].color(), Some(Color::White));
        assert_eq!(game.board()[Square::D5].origin(), Square::E2);
        assert_eq!(
            Square::iter()
                .filter(|&sq| game.board().is_occupied_by(Color::Black, sq))
                .count(),
            15
        );
    }

    #[test]
    fn moves_are_applied_to_the_board() {
        let mut game = Game::new(Color::Black);
        play(&mut game, "g8\nf6\nquit\n").0.unwrap();

        let mut board = Board::default();
        let captured = board.apply_move(Square::G8, Square::F6);
        assert_eq!(captured, Piece::empty(Square::F6));
        assert_eq!(game.board(), &board);
        assert_eq!(game.turn(), Color::White);
    }
}
