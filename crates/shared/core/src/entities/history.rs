use crate::values::Cash;

/// Both bids of one completed round, seen from one bidder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidRecord {
    pub own: Cash,
    pub opponent: Cash,
}

/// Append-only record of completed rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BidHistory {
    records: Vec<BidRecord>,
}

impl BidHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rounds: usize) -> Self {
        Self {
            records: Vec::with_capacity(rounds),
        }
    }

    pub fn push(&mut self, own: Cash, opponent: Cash) {
        self.records.push(BidRecord { own, opponent });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[BidRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&BidRecord> {
        self.records.last()
    }

    pub fn own_bids(&self) -> impl DoubleEndedIterator<Item = Cash> + ExactSizeIterator + '_ {
        self.records.iter().map(|r| r.own)
    }

    pub fn opponent_bids(
        &self,
    ) -> impl DoubleEndedIterator<Item = Cash> + ExactSizeIterator + '_ {
        self.records.iter().map(|r| r.opponent)
    }
}

impl FromIterator<(Cash, Cash)> for BidHistory {
    fn from_iter<I: IntoIterator<Item = (Cash, Cash)>>(iter: I) -> Self {
        Self {
            records: iter
                .into_iter()
                .map(|(own, opponent)| BidRecord { own, opponent })
                .collect(),
        }
    }
}
