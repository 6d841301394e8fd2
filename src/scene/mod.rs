pub mod composer;

pub use composer::SceneComposer;
