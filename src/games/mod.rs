pub mod hypercube;
pub mod hypercube_index;
