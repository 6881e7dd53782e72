//! Teaching Material Use Cases

mod list_materials;
mod upload_material;

pub use list_materials::ListMaterialsUseCase;
pub use upload_material::{UploadMaterialCommand, UploadMaterialUseCase};
