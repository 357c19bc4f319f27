use crate::transform::Transform;

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl serde::Serialize for Transform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Transform", 6)?;
        state.serialize_field("ax", &self.ax())?;
        state.serialize_field("ay", &self.ay())?;
        state.serialize_field("bx", &self.bx())?;
        state.serialize_field("by", &self.by())?;
        state.serialize_field("tx", &self.tx())?;
        state.serialize_field("ty", &self.ty())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Transform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TransformData {
            ax: f64,
            ay: f64,
            bx: f64,
            by: f64,
            tx: f64,
            ty: f64,
        }

        let TransformData {
            ax,
            ay,
            bx,
            by,
            tx,
            ty,
        } = TransformData::deserialize(deserializer)?;

        Transform::new(ax, ay, bx, by, tx, ty).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let t = Transform::new(2.0, 0.5, -0.5, 2.0, 10.0, 20.0)?;
        let serialized = serde_json::to_string(&t)?;
        assert_eq!(
            serialized,
            r#"{"ax":2.0,"ay":0.5,"bx":-0.5,"by":2.0,"tx":10.0,"ty":20.0}"#
        );
        let deserialized: Transform = serde_json::from_str(&serialized)?;
        assert_eq!(t, deserialized);
        Ok(())
    }
}
