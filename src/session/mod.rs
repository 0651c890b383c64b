//! Turn loop over several games that share every guess
//!
//! A session owns one [`CandidateSet`] per game. Each turn takes one guess,
//! gathers a feedback code per game (scored locally when hosting, asked of
//! the [`Player`] otherwise) and narrows every set in game order.

mod player;

pub use player::Player;

use crate::core::{Feedback, FeedbackError, Pattern, Word};
use crate::solver::{CandidateSet, EntropyTable, SUGGESTION_LIMIT, Suggestions, rank_guesses};
use crate::wordlists::Corpus;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;

/// Turns allowed before the number of games is added
pub const BASE_TURNS: usize = 5;

/// Settings resolved from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub games: usize,
    /// Draw secrets and score guesses locally
    pub host: bool,
}

impl SessionConfig {
    #[must_use]
    pub const fn max_turns(&self) -> usize {
        BASE_TURNS + self.games
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 4,
            host: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won { turns: usize },
    OutOfTurns { turns: usize },
}

impl SessionState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One played turn: the guess and the code each game returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord<'a> {
    pub guess: &'a Word,
    pub feedback: Vec<Feedback>,
}

/// A guess that cannot be played; the player is asked again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("'{0}' is not in the guess list")]
    NotInCorpus(String),
    #[error("'{0}' has already been guessed")]
    AlreadyGuessed(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("at least one game is required")]
    NoGames,
    #[error("cannot host {requested} games with only {available} answers")]
    NotEnoughAnswers { requested: usize, available: usize },
    #[error("answers have {answers} letters but guesses have {guesses}")]
    LengthMismatch { answers: usize, guesses: usize },
    #[error("game {game}: {source}")]
    Feedback {
        game: usize,
        #[source]
        source: FeedbackError,
    },
    #[error("expected feedback for {expected} games, got {actual}")]
    FeedbackCount { expected: usize, actual: usize },
    #[error("the session is already over")]
    Finished,
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parallel games played with shared guesses
#[derive(Debug, Clone)]
pub struct Session<'a> {
    answers: &'a Corpus,
    legal: &'a Corpus,
    games: Vec<CandidateSet<'a>>,
    secrets: Option<Vec<&'a Word>>,
    history: Vec<GuessRecord<'a>>,
    guessed: FxHashSet<&'a Word>,
    max_turns: usize,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Set up a session, drawing distinct secrets from `answers` when hosting
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if no games are requested, the corpora disagree
    /// on word length, or there are fewer answers than hosted games.
    pub fn new<R: Rng + ?Sized>(
        config: &SessionConfig,
        answers: &'a Corpus,
        legal: &'a Corpus,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let secrets = if config.host {
            if config.games > answers.len() {
                return Err(SessionError::NotEnoughAnswers {
                    requested: config.games,
                    available: answers.len(),
                });
            }
            let picked: Vec<&'a Word> = index::sample(rng, answers.len(), config.games)
                .into_iter()
                .map(|i| &answers.words()[i])
                .collect();
            log::debug!("drew {} secrets from {} answers", picked.len(), answers.len());
            Some(picked)
        } else {
            None
        };

        Self::build(config.games, answers, legal, secrets)
    }

    /// Host a session against fixed secrets, one game per secret
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if `secrets` is empty or the corpora disagree
    /// on word length.
    pub fn with_secrets(answers: &'a Corpus, legal: &'a Corpus, secrets: Vec<&'a Word>) -> Result<Self, SessionError> {
        Self::build(secrets.len(), answers, legal, Some(secrets))
    }

    fn build(
        games: usize,
        answers: &'a Corpus,
        legal: &'a Corpus,
        secrets: Option<Vec<&'a Word>>,
    ) -> Result<Self, SessionError> {
        if games == 0 {
            return Err(SessionError::NoGames);
        }
        if answers.word_length() != legal.word_length() {
            return Err(SessionError::LengthMismatch {
                answers: answers.word_length(),
                guesses: legal.word_length(),
            });
        }

        Ok(Self {
            answers,
            legal,
            games: (0..games).map(|_| CandidateSet::new(answers)).collect(),
            secrets,
            history: Vec::new(),
            guessed: FxHashSet::default(),
            max_turns: BASE_TURNS + games,
            state: SessionState::InProgress,
        })
    }

    /// Play until every game is solved or the turns run out
    ///
    /// Rejected guesses are passed back to the player, who is asked again.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` when the player runs out of input, or a
    /// feedback error if the player supplies a code of the wrong length.
    pub fn run<P: Player + ?Sized>(&mut self, player: &mut P) -> Result<SessionState, SessionError> {
        while !self.state.is_over() {
            player.show(self);

            let turn = self.turn() + 1;
            let mut rejected = None;
            let guess = loop {
                let input = player.guess(turn, rejected.as_ref())?;
                match self.resolve_guess(&input) {
                    Ok(word) => break word,
                    Err(err) => {
                        log::debug!("turn {turn}: {err}");
                        rejected = Some(err);
                    }
                }
            };

            self.play_turn(guess, player)?;
        }

        player.finish(self);
        Ok(self.state)
    }

    /// Look up a typed guess in the legal corpus
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the word is not a legal guess or has already
    /// been played.
    pub fn resolve_guess(&self, input: &str) -> Result<&'a Word, GuessError> {
        let word = self
            .legal
            .get(input)
            .ok_or_else(|| GuessError::NotInCorpus(input.trim().to_lowercase()))?;
        if self.guessed.contains(word) {
            return Err(GuessError::AlreadyGuessed(word.text().to_string()));
        }
        Ok(word)
    }

    /// Gather one code per game for `guess` and apply them
    ///
    /// Solved games get the skip sentinel; hosted games are scored against
    /// their secret; the rest are asked of `player`.
    ///
    /// # Errors
    ///
    /// See [`Session::apply_turn`]. I/O errors from the player abort the turn
    /// before anything is applied.
    pub fn play_turn<P: Player + ?Sized>(
        &mut self,
        guess: &'a Word,
        player: &mut P,
    ) -> Result<SessionState, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::Finished);
        }

        let mut feedback = Vec::with_capacity(self.games.len());
        for (game, set) in self.games.iter().enumerate() {
            let code = if set.is_solved() {
                Feedback::skip(set.word_length())
            } else if let Some(secrets) = &self.secrets {
                let pattern = Pattern::calculate(guess, secrets[game]);
                player.reveal(game, guess, pattern);
                Feedback::Scored(pattern)
            } else {
                player.feedback(game, guess)?
            };
            feedback.push(code);
        }

        self.apply_turn(guess, feedback)
    }

    /// Apply one code per game for `guess` and record the turn
    ///
    /// Every code is checked before any game is narrowed, so a rejected turn
    /// leaves the session exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session is over, the guess was already
    /// played, the number of codes differs from the number of games, or a
    /// code does not fit the word length.
    pub fn apply_turn(&mut self, guess: &'a Word, feedback: Vec<Feedback>) -> Result<SessionState, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::Finished);
        }
        if self.guessed.contains(guess) {
            return Err(GuessError::AlreadyGuessed(guess.text().to_string()).into());
        }
        if feedback.len() != self.games.len() {
            return Err(SessionError::FeedbackCount {
                expected: self.games.len(),
                actual: feedback.len(),
            });
        }

        let word_length = self.word_length();
        for (game, code) in feedback.iter().enumerate() {
            let checked = if guess.len() == word_length {
                code.check_length(word_length)
            } else {
                Err(FeedbackError::GuessLength {
                    expected: word_length,
                    actual: guess.len(),
                })
            };
            checked.map_err(|source| SessionError::Feedback { game, source })?;
        }

        for (game, (set, &code)) in self.games.iter_mut().zip(&feedback).enumerate() {
            set.apply_feedback(guess, code)
                .map_err(|source| SessionError::Feedback { game, source })?;
        }

        self.guessed.insert(guess);
        self.history.push(GuessRecord { guess, feedback });

        let turns = self.turn();
        if self.games.iter().all(CandidateSet::is_solved) {
            self.state = SessionState::Won { turns };
        } else if turns >= self.max_turns {
            self.state = SessionState::OutOfTurns { turns };
        }
        log::debug!("turn {turns}: {guess} -> {:?}", self.state);

        Ok(self.state)
    }

    /// Entropy table for the legal guesses not played yet
    #[must_use]
    pub fn rank(&self) -> EntropyTable<'a> {
        rank_guesses(self.legal.words(), &self.games, &self.guessed)
    }

    #[must_use]
    pub fn suggestions(&self, table: &EntropyTable<'a>) -> Suggestions<'a> {
        Suggestions::from_table(table, &self.games, SUGGESTION_LIMIT)
    }

    #[must_use]
    pub fn games(&self) -> &[CandidateSet<'a>] {
        &self.games
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord<'a>] {
        &self.history
    }

    /// Hidden secrets, when hosting
    #[must_use]
    pub fn secrets(&self) -> Option<&[&'a Word]> {
        self.secrets.as_deref()
    }

    #[must_use]
    pub const fn is_host(&self) -> bool {
        self.secrets.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Turns played so far
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.answers.word_length()
    }

    #[must_use]
    pub const fn answers(&self) -> &'a Corpus {
        self.answers
    }

    #[must_use]
    pub const fn legal(&self) -> &'a Corpus {
        self.legal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Plays back canned guesses and codes, recording what it was told
    #[derive(Default)]
    struct Script {
        guesses: VecDeque<&'static str>,
        codes: VecDeque<&'static str>,
        rejected: Vec<GuessError>,
        asked: Vec<usize>,
        revealed: Vec<(usize, String, Pattern)>,
        shown: usize,
        finished: bool,
    }

    impl Script {
        fn new(guesses: &[&'static str], codes: &[&'static str]) -> Self {
            Self {
                guesses: guesses.iter().copied().collect(),
                codes: codes.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    fn exhausted() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
    }

    impl Player for Script {
        fn show(&mut self, _session: &Session<'_>) {
            self.shown += 1;
        }

        fn guess(&mut self, _turn: usize, rejected: Option<&GuessError>) -> io::Result<String> {
            if let Some(err) = rejected {
                self.rejected.push(err.clone());
            }
            self.guesses.pop_front().map(String::from).ok_or_else(exhausted)
        }

        fn feedback(&mut self, game: usize, guess: &Word) -> io::Result<Feedback> {
            self.asked.push(game);
            let code = self.codes.pop_front().ok_or_else(exhausted)?;
            Feedback::parse(code, guess.len()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
        }

        fn reveal(&mut self, game: usize, guess: &Word, pattern: Pattern) {
            self.revealed.push((game, guess.text().to_string(), pattern));
        }

        fn finish(&mut self, _session: &Session<'_>) {
            self.finished = true;
        }
    }

    fn corpus(words: &[&str]) -> Corpus {
        Corpus::from_lines(words, 5).unwrap()
    }

    fn code(text: &str) -> Feedback {
        Feedback::parse(text, text.len()).unwrap()
    }

    fn solo(games: usize) -> SessionConfig {
        SessionConfig { games, host: false }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn max_turns_grows_with_games() {
        assert_eq!(SessionConfig { games: 1, host: false }.max_turns(), 6);
        assert_eq!(SessionConfig::default().max_turns(), 9);
    }

    #[test]
    fn hosted_one_word_corpus_wins_in_one_turn() {
        let answers = corpus(&["crane"]);
        let legal = corpus(&["slate", "crane"]);
        let config = SessionConfig { games: 1, host: true };
        let mut session = Session::new(&config, &answers, &legal, &mut rng()).unwrap();

        let table = session.rank();
        let best = table.best().unwrap();
        assert_eq!(best.word.text(), "crane");
        assert_eq!(best.entropies, vec![1.0]);

        let mut script = Script::new(&["crane"], &[]);
        let state = session.run(&mut script).unwrap();

        assert_eq!(state, SessionState::Won { turns: 1 });
        assert_eq!(script.revealed, vec![(0, "crane".to_string(), Pattern::perfect(5))]);
        assert!(script.asked.is_empty());
        assert!(script.finished);
    }

    #[test]
    fn hosted_secrets_are_distinct_and_seeded() {
        let answers = corpus(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let config = SessionConfig { games: 4, host: true };

        let first = Session::new(&config, &answers, &answers, &mut rng()).unwrap();
        let second = Session::new(&config, &answers, &answers, &mut rng()).unwrap();

        let secrets = first.secrets().unwrap();
        assert_eq!(secrets.len(), 4);
        let distinct: FxHashSet<&Word> = secrets.iter().copied().collect();
        assert_eq!(distinct.len(), 4);
        assert_eq!(secrets, second.secrets().unwrap());
    }

    #[test]
    fn fixed_secrets_score_every_unsolved_game() {
        let answers = corpus(&["crane", "slate", "trace"]);
        let words = answers.words();
        let mut session = Session::with_secrets(&answers, &answers, vec![&words[0], &words[2]]).unwrap();
        assert!(session.is_host());

        let mut script = Script::new(&["trace", "crane"], &[]);
        let state = session.run(&mut script).unwrap();

        assert_eq!(state, SessionState::Won { turns: 2 });
        let revealed: Vec<(usize, String)> = script
            .revealed
            .iter()
            .map(|(game, guess, pattern)| (*game, format!("{guess} {pattern}")))
            .collect();
        assert_eq!(
            revealed,
            vec![
                (0, "trace 02212".to_string()),
                (1, "trace 22222".to_string()),
                (0, "crane 22222".to_string()),
            ]
        );
    }

    #[test]
    fn setup_errors() {
        let answers = corpus(&["crane", "slate"]);
        let hosted = SessionConfig { games: 3, host: true };
        assert!(matches!(
            Session::new(&hosted, &answers, &answers, &mut rng()),
            Err(SessionError::NotEnoughAnswers {
                requested: 3,
                available: 2
            })
        ));
        // Without hosting, more games than answers is fine
        assert!(Session::new(&solo(3), &answers, &answers, &mut rng()).is_ok());

        assert!(matches!(
            Session::new(&solo(0), &answers, &answers, &mut rng()),
            Err(SessionError::NoGames)
        ));

        let six = Corpus::from_lines(&["cranes"], 6).unwrap();
        assert!(matches!(
            Session::new(&solo(1), &answers, &six, &mut rng()),
            Err(SessionError::LengthMismatch {
                answers: 5,
                guesses: 6
            })
        ));
    }

    #[test]
    fn invalid_and_repeated_guesses_are_asked_again() {
        let answers = corpus(&["crane", "slate", "irate"]);
        let legal = corpus(&["crane", "slate", "irate", "zzzzz"]);
        let mut session = Session::new(&solo(1), &answers, &legal, &mut rng()).unwrap();

        let mut script = Script::new(&["qqqqq", "zzzzz", "ZZZZZ", " Crane "], &["00000", "22222"]);
        let state = session.run(&mut script).unwrap();

        assert_eq!(state, SessionState::Won { turns: 2 });
        assert_eq!(
            script.rejected,
            vec![
                GuessError::NotInCorpus("qqqqq".into()),
                GuessError::AlreadyGuessed("zzzzz".into())
            ]
        );
        assert_eq!(script.shown, 2);
        let played: Vec<&str> = session.history().iter().map(|r| r.guess.text()).collect();
        assert_eq!(played, vec!["zzzzz", "crane"]);
    }

    #[test]
    fn runs_out_of_turns() {
        let answers = corpus(&["crane", "slate"]);
        let legal = corpus(&["bbbbb", "ddddd", "fffff", "ggggg", "hhhhh", "iiiii", "crane", "slate"]);
        let mut session = Session::new(&solo(1), &answers, &legal, &mut rng()).unwrap();

        let misses = ["bbbbb", "ddddd", "fffff", "ggggg", "hhhhh", "iiiii"];
        let mut script = Script::new(&misses, &["00000"; 6]);
        let state = session.run(&mut script).unwrap();

        assert_eq!(state, SessionState::OutOfTurns { turns: 6 });
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.games()[0].len(), 2);
        assert!(matches!(
            session.apply_turn(&legal.words()[6], vec![code("22222")]),
            Err(SessionError::Finished)
        ));
    }

    #[test]
    fn win_on_last_turn_counts_as_won() {
        let answers = corpus(&["crane", "slate"]);
        let legal = corpus(&["bbbbb", "ddddd", "fffff", "ggggg", "hhhhh", "crane", "slate"]);
        let mut session = Session::new(&solo(1), &answers, &legal, &mut rng()).unwrap();

        let guesses = ["bbbbb", "ddddd", "fffff", "ggggg", "hhhhh", "crane"];
        let mut script = Script::new(&guesses, &["00000", "00000", "00000", "00000", "00000", "22222"]);

        assert_eq!(session.run(&mut script).unwrap(), SessionState::Won { turns: 6 });
    }

    #[test]
    fn solved_games_are_skipped() {
        let answers = corpus(&["crane", "slate"]);
        let mut session = Session::new(&solo(2), &answers, &answers, &mut rng()).unwrap();

        // SLATE scores 00202 against CRANE
        let mut script = Script::new(&["crane", "slate"], &["22222", "00202", "22222"]);
        let state = session.run(&mut script).unwrap();

        assert_eq!(state, SessionState::Won { turns: 2 });
        assert_eq!(script.asked, vec![0, 1, 1]);
        assert_eq!(session.history()[1].feedback, vec![Feedback::skip(5), code("22222")]);
        assert_eq!(session.games()[0].size_history(), &[2, 1, 1]);
    }

    #[test]
    fn malformed_feedback_changes_nothing() {
        let answers = corpus(&["crane", "slate"]);
        let mut session = Session::new(&solo(2), &answers, &answers, &mut rng()).unwrap();
        let crane = &answers.words()[0];

        let err = session
            .apply_turn(crane, vec![code("22222"), code("0000")])
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Feedback {
                game: 1,
                source: FeedbackError::LengthMismatch {
                    expected: 5,
                    actual: 4
                }
            }
        ));
        assert!(matches!(
            session.apply_turn(crane, vec![code("22222")]),
            Err(SessionError::FeedbackCount {
                expected: 2,
                actual: 1
            })
        ));

        assert!(session.history().is_empty());
        assert!(session.resolve_guess("crane").is_ok());
        for game in session.games() {
            assert_eq!(game.size_history(), &[2]);
            assert!(!game.is_solved());
        }
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn contradictory_feedback_keeps_session_going() {
        let answers = corpus(&["crane", "slate", "crate"]);
        let legal = corpus(&["crane", "slate", "crate", "ccccc"]);
        let mut session = Session::new(&solo(1), &answers, &legal, &mut rng()).unwrap();

        // C absent, then C correct
        session
            .apply_turn(session.resolve_guess("ccccc").unwrap(), vec![code("00000")])
            .unwrap();
        let state = session
            .apply_turn(session.resolve_guess("crate").unwrap(), vec![code("20000")])
            .unwrap();

        assert_eq!(state, SessionState::InProgress);
        assert!(session.games()[0].is_empty());

        let table = session.rank();
        assert_eq!(table.len(), 2);
        assert!(table.rows().iter().all(|row| row.total() == 0.0));
        let suggestions = session.suggestions(&table);
        assert!(suggestions.candidates.is_empty());
        assert!(suggestions.known_answers.is_empty());
    }

    #[test]
    fn player_running_dry_is_an_error() {
        let answers = corpus(&["crane", "slate"]);
        let mut session = Session::new(&solo(1), &answers, &answers, &mut rng()).unwrap();

        let mut script = Script::new(&["crane"], &[]);
        assert!(matches!(session.run(&mut script), Err(SessionError::Io(_))));
        assert!(session.history().is_empty());
    }
}
