mod generate;
mod tree;

pub use generate::handle_generate_command;
pub use tree::handle_tree_command;
