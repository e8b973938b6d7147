use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Customer roster is misaligned: {names} names against {pen_sizes} pen sizes")]
    Misaligned {
        names: usize,
        pen_sizes: usize
    }
}
