use std::{
    any::{Any, TypeId},
    collections::HashMap,
};

#[derive(Debug, Default)]
pub struct TypeMap(HashMap<TypeId, Box<dyn Any>>);

impl TypeMap {
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.0
            .get(&TypeId::of::<T>())
            .and_then(|x| x.downcast_ref())
    }

    pub fn insert<T: 'static>(&mut self, x: T) {
        self.0.insert(TypeId::of::<T>(), Box::new(x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Port(u16);

    #[test]
    fn get_inserted() {
        // Arrange
        let mut sut = TypeMap::default();
        sut.insert(Port(3000));
        sut.insert("relay");

        // Act
        let port = sut.get::<Port>();
        let name = sut.get::<&str>();

        // Assert
        assert_eq!(port, Some(&Port(3000)));
        assert_eq!(name, Some(&"relay"));
    }

    #[test]
    fn get_missing() {
        let sut = TypeMap::default();
        assert_eq!(sut.get::<Port>(), None);
    }

    #[test]
    fn insert_replaces() {
        // Arrange
        let mut sut = TypeMap::default();
        sut.insert(Port(3000));

        // Act
        sut.insert(Port(8080));

        // Assert
        assert_eq!(sut.get::<Port>(), Some(&Port(8080)));
    }
}
