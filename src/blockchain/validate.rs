use super::Block;
use super::pow::valid_proof;

/// Validate a candidate chain: every block after the first must link to
/// its predecessor's hash and carry a proof that solves the predecessor's
/// puzzle. The genesis block is not re-validated against a predecessor.
/// Chains of length 0 or 1 are trivially valid.
pub fn is_valid_chain(chain: &[Block], difficulty: usize) -> bool {
    for pair in chain.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);

        // Check linkage
        if current.previous_hash != prev.hash() {
            return false;
        }

        // Check PoW
        if !valid_proof(prev.proof, current.proof, difficulty) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::is_valid_chain;
    use crate::blockchain::{Blockchain, pow};

    const DIFFICULTY: usize = 2;

    /// Mine `blocks` real blocks on top of genesis.
    fn mined_chain(blocks: usize) -> Blockchain {
        let mut bc = Blockchain::new(DIFFICULTY);
        for i in 0..blocks {
            let proof = pow::proof_of_work(bc.last_block().proof, DIFFICULTY);
            bc.add_transaction("0".into(), format!("miner{i}"), 1);
            bc.new_block(proof, None);
        }
        bc
    }

    #[test]
    fn mined_chain_round_trips() {
        let bc = mined_chain(3);
        assert!(is_valid_chain(&bc.chain, DIFFICULTY));
    }

    #[test]
    fn genesis_only_chain_is_valid() {
        let bc = Blockchain::new(DIFFICULTY);
        assert!(is_valid_chain(&bc.chain, DIFFICULTY));
    }

    #[test]
    fn tampered_proof_is_detected() {
        let mut bc = mined_chain(2);
        bc.chain[1].proof += 1;
        assert!(!is_valid_chain(&bc.chain, DIFFICULTY));
    }

    #[test]
    fn tampered_previous_hash_is_detected() {
        let mut bc = mined_chain(2);
        bc.chain[2].previous_hash = "0000deadbeef".into();
        assert!(!is_valid_chain(&bc.chain, DIFFICULTY));
    }

    #[test]
    fn tampered_transaction_is_detected() {
        let mut bc = mined_chain(2);
        // Rewriting history in block 2 breaks block 3's linkage.
        bc.chain[1].transactions[0].amount = 1_000_000;
        assert!(!is_valid_chain(&bc.chain, DIFFICULTY));
    }

    #[test]
    fn unsolved_proof_is_detected() {
        let mut bc = Blockchain::new(DIFFICULTY);
        // Link correctly but use a proof below the smallest solution.
        let solution = pow::proof_of_work(bc.last_block().proof, DIFFICULTY);
        if solution == 0 {
            return; // nothing below the solution to test with
        }
        let tip_hash = bc.last_block().hash();
        bc.new_block(solution - 1, Some(tip_hash));
        assert!(!is_valid_chain(&bc.chain, DIFFICULTY));
    }
}
