mod pascal;
mod queue;
mod tree;
