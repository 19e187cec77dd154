use std::collections::HashMap;

use num_bigint::BigInt;

use crate::combinations::Combinations;
use crate::error::SolveError;
use crate::interpolate::interpolate_at_zero;
use crate::point::Point;

/// All points decoded from one share document, plus the threshold k.
///
/// Points are kept sorted by ascending x so that subset enumeration, and
/// with it the plurality tie-break, is reproducible for a given input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
    k: usize,
}

impl PointSet {
    pub fn new(mut points: Vec<Point>, k: usize) -> Self {
        points.sort_by(|a, b| a.x.cmp(&b.x));
        PointSet { points, k }
    }

    /// Total number of points supplied.
    pub fn n(&self) -> usize {
        self.points.len()
    }

    /// Minimum number of points that define the secret polynomial.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Reconstruct the secret: interpolate every k-subset at x = 0 and
    /// let the candidates vote.
    pub fn recover_secret(&self) -> Result<BigInt, SolveError> {
        let required = self.k;
        let provided = self.n();
        self.tally_secrets()?
            .into_winner()
            .ok_or(SolveError::InsufficientPoints(required, provided))
    }

    /// Run the vote and expose the full tally.
    pub fn tally_secrets(&self) -> Result<SecretTally, SolveError> {
        if self.k == 0 {
            return Err(SolveError::InvalidThreshold(self.k));
        }
        if self.n() < self.k {
            return Err(SolveError::InsufficientPoints(self.k, self.n()));
        }

        let mut tally = SecretTally::new();
        for combination in Combinations::new(self.n(), self.k) {
            let subset: Vec<Point> = combination
                .iter()
                .map(|&index| self.points[index].clone())
                .collect();
            tally.record(interpolate_at_zero(&subset)?);
        }
        Ok(tally)
    }
}

/// Running plurality vote over candidate secrets.
///
/// The winner is the first candidate (in recording order) to reach the
/// maximal vote count; a later candidate that merely ties never displaces
/// the incumbent.
#[derive(Clone, Debug, Default)]
pub struct SecretTally {
    votes: HashMap<BigInt, usize>,
    winner: Option<(BigInt, usize)>,
}

impl SecretTally {
    pub fn new() -> Self {
        SecretTally::default()
    }

    /// Count one vote for `candidate`.
    pub fn record(&mut self, candidate: BigInt) {
        let votes = self
            .votes
            .entry(candidate.clone())
            .and_modify(|count| *count += 1)
            .or_insert(1);
        let votes = *votes;

        let leads = self
            .winner
            .as_ref()
            .map_or(true, |(_, best)| votes > *best);
        if leads {
            self.winner = Some((candidate, votes));
        }
    }

    /// Votes recorded so far for `candidate`.
    pub fn votes_for(&self, candidate: &BigInt) -> usize {
        self.votes.get(candidate).copied().unwrap_or(0)
    }

    /// Highest vote count any candidate has reached.
    pub fn max_votes(&self) -> usize {
        self.winner.as_ref().map_or(0, |(_, votes)| *votes)
    }

    /// Number of distinct candidate secrets seen.
    pub fn candidates(&self) -> usize {
        self.votes.len()
    }

    pub fn winner(&self) -> Option<&BigInt> {
        self.winner.as_ref().map(|(candidate, _)| candidate)
    }

    pub fn into_winner(self) -> Option<BigInt> {
        self.winner.map(|(candidate, _)| candidate)
    }
}
