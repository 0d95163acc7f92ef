use crate::framing::ObjectKind;
use crate::storable::Storable;

impl Storable for super::Tree {
    const KIND: ObjectKind = ObjectKind::Tree;

    /// `<mode> <name>\0<20 raw digest bytes>` per entry, with nothing between entries.
    fn payload(&self) -> Vec<u8> {
        let mut data = Vec::new();
        for entry in &self.entries {
            data.extend_from_slice(&entry.mode_token);
            data.push(b' ');
            data.extend_from_slice(&entry.name);
            data.push(b'\0');
            data.extend_from_slice(&*entry.oid);
        }
        data
    }
}
