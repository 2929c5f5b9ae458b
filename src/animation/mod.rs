pub mod dots;
pub mod ease;
pub mod letters;
pub mod track;
pub mod wave;
