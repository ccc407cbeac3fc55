//! # pathwise-algo - 学习路径推荐核心库
//!
//! Pure, rule-based recommendation logic for quiz-driven learning paths:
//!
//! - **Performance analysis** - per-concept strengths and weaknesses from quiz history
//! - **Learning style inference** - label from the questionnaire and interaction log
//! - **Concept recommendation** - next / alternative concept via the concept hierarchy
//! - **Path building** - bounded, de-duplicated path with style-matched resources
//!
//! ## 设计理念
//!
//! - **纯函数** - every operation reads explicit snapshots; no global session state
//! - **可注入随机数** - random choices draw from a caller-supplied `rand::Rng`
//! - **无错误路径** - missing reference data degrades to empty results
//!
//! ## 模块结构
//!
//! - [`types`] - 公共类型和常量
//! - [`hierarchy`] - subject -> level -> concept reference data
//! - [`catalog`] - concept -> modality -> resource reference data
//! - [`performance`] - strengths / weaknesses
//! - [`style`] - learning style inference
//! - [`recommender`] - next and alternative concepts
//! - [`path`] - learning path assembly
//! - [`sanitize`] - input clean-up
//! - [`rng`] - seedable generator
//!
//! ## 使用示例
//!
//! ```rust
//! use pathwise_algo::{rng, ConceptHierarchy, PathBuilder, ResourceCatalog};
//!
//! let hierarchy = ConceptHierarchy::new()
//!     .with_level("Physics", "foundational", ["Kinematics", "Laws of Motion"])
//!     .with_level("Physics", "intermediate", ["Optics"]);
//! let catalog = ResourceCatalog::new();
//!
//! let mut rng = rng::seeded(42);
//! let path = PathBuilder::new(&hierarchy, &catalog).build("Physics", &[], "Mixed", &mut rng);
//! assert_eq!(path.len(), 2);
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod catalog;
pub mod hierarchy;
pub mod path;
pub mod performance;
pub mod recommender;
pub mod rng;
pub mod sanitize;
pub mod style;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

pub use catalog::ResourceCatalog;
pub use hierarchy::{ConceptHierarchy, Level};
pub use path::PathBuilder;
pub use performance::{analyze, ConceptPerformance, PerformanceAnalysis};
pub use recommender::{tested_concepts, ConceptRecommender};
pub use rng::PathRng;
pub use style::{infer, InteractionTally};
