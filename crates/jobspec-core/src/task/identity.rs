use std::any::{Any, TypeId};

pub trait ConfigurationIdentity: Any {
    fn exact_type_id(&self) -> TypeId;

    fn exact_type_name(&self) -> &'static str;
}

impl<T: Any> ConfigurationIdentity for T {
    fn exact_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn exact_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
