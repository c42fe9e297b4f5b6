pub mod input_bar;
pub mod proposal_list;
pub mod theme;
