use sha2::{Digest, Sha256};

/// Check whether `proof` solves the puzzle posed by `last_proof`: the
/// SHA-256 of the concatenated decimal strings must start with
/// `difficulty` leading zeros (in hex).
pub fn valid_proof(last_proof: u64, proof: u64, difficulty: usize) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());

    let target_prefix = "0".repeat(difficulty);
    digest.starts_with(&target_prefix)
}

/// Brute-force the smallest proof satisfying `valid_proof`, searching
/// linearly from 0. CPU-bound; callers must not hold the chain lock.
pub fn proof_of_work(last_proof: u64, difficulty: usize) -> u64 {
    let mut proof: u64 = 0;
    while !valid_proof(last_proof, proof, difficulty) {
        proof += 1;
    }
    proof
}

#[cfg(test)]
mod tests {
    use super::{proof_of_work, valid_proof};

    #[test]
    fn solved_proof_is_valid() {
        for last_proof in [0, 1, 100, 35293] {
            let proof = proof_of_work(last_proof, 2);
            assert!(valid_proof(last_proof, proof, 2));
        }
    }

    #[test]
    fn solution_is_minimal() {
        let last_proof = 100;
        let solution = proof_of_work(last_proof, 2);
        for candidate in 0..solution {
            assert!(!valid_proof(last_proof, candidate, 2));
        }
    }

    #[test]
    fn zero_difficulty_accepts_everything() {
        assert!(valid_proof(1, 0, 0));
        assert_eq!(proof_of_work(1, 0), 0);
    }

    #[test]
    fn higher_difficulty_rejects_lower_solution() {
        let last_proof = 42;
        let easy = proof_of_work(last_proof, 1);
        let hard = proof_of_work(last_proof, 3);
        assert!(easy <= hard);
        assert!(valid_proof(last_proof, hard, 1));
        if easy < hard {
            // hard is the smallest difficulty-3 solution, so anything
            // below it must fail at that difficulty
            assert!(!valid_proof(last_proof, easy, 3));
        }
    }
}
