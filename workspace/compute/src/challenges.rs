use model::entities::prelude::{Challenge, ChallengeStatus};
use tracing::{debug, instrument};

/// Challenges split by status, each group in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusPartition {
    pub active: Vec<Challenge>,
    pub upcoming: Vec<Challenge>,
    pub completed: Vec<Challenge>,
}

impl StatusPartition {
    pub fn get(&self, status: ChallengeStatus) -> &[Challenge] {
        match status {
            ChallengeStatus::Active => &self.active,
            ChallengeStatus::Upcoming => &self.upcoming,
            ChallengeStatus::Completed => &self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.upcoming.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups in page order: active, upcoming, completed.
    pub fn sections(&self) -> impl Iterator<Item = (ChallengeStatus, &[Challenge])> {
        ChallengeStatus::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[instrument(skip(challenges), fields(num_challenges = challenges.len()))]
pub fn partition_by_status(challenges: &[Challenge]) -> StatusPartition {
    let mut partition = StatusPartition::default();
    for challenge in challenges {
        let group = match challenge.status {
            ChallengeStatus::Active => &mut partition.active,
            ChallengeStatus::Upcoming => &mut partition.upcoming,
            ChallengeStatus::Completed => &mut partition.completed,
        };
        group.push(challenge.clone());
    }
    debug!(
        active = partition.active.len(),
        upcoming = partition.upcoming.len(),
        completed = partition.completed.len(),
        "Partitioned challenges"
    );
    partition
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{CookbookStore, MockStore};

    #[test]
    fn test_groups_are_disjoint_and_cover_input() {
        let challenges = MockStore::new().challenges();
        let partition = partition_by_status(&challenges);

        assert_eq!(partition.len(), challenges.len());
        for (status, group) in partition.sections() {
            assert!(group.iter().all(|c| c.status == status));
        }
        for challenge in &challenges {
            let hits = partition
                .sections()
                .filter(|(_, group)| group.iter().any(|c| c.id == challenge.id))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_mock_groups() {
        let partition = partition_by_status(&MockStore::new().challenges());
        assert_eq!(partition.active.len(), 2);
        assert_eq!(partition.upcoming.len(), 1);
        assert_eq!(partition.completed.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let partition = partition_by_status(&[]);
        assert!(partition.is_empty());
        assert!(partition.get(ChallengeStatus::Active).is_empty());
    }
}
