#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use crate::driver::{Driver, DriverError};
    use crate::error::StrufigError;
    use crate::schema::{Field, Schema, Walker};
    use crate::types::LoadStatus;

    /// Two namespace fields among ordinary ones, no defaults.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct NameSpace {
        pub decode_dir: String,
        pub environment: String,
        pub timer: i64,
        pub kind: String,
        pub test_timeout: f64,
    }

    impl Schema for NameSpace {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("DecodeDir"), &mut self.decode_dir)?;
            walker.leaf(&Field::new("Environment").namespace(), &mut self.environment)?;
            walker.leaf(&Field::new("Timer"), &mut self.timer)?;
            walker.leaf(&Field::new("Type").namespace(), &mut self.kind)?;
            walker.leaf(&Field::new("TestTimeout"), &mut self.test_timeout)
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct SubInfo {
        pub sub_thing_float: f64,
        pub sub_thing_bool: bool,
    }

    impl Schema for SubInfo {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("SubThingFloat"), &mut self.sub_thing_float)?;
            walker.leaf(&Field::new("SubThingBool"), &mut self.sub_thing_bool)
        }
    }

    /// The shape a remote-backed application would declare.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct RemoteConfig {
        pub decode_dir: String,
        pub environment: String,
        pub timer: i64,
        pub kind: String,
        pub test_timeout: f64,
        pub sub_info: SubInfo,
    }

    impl Schema for RemoteConfig {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(
                &Field::new("DecodeDir").with_default("/home/user/decoder"),
                &mut self.decode_dir,
            )?;
            walker.leaf(
                &Field::new("Environment").with_default("developer").namespace(),
                &mut self.environment,
            )?;
            walker.leaf(&Field::new("Timer"), &mut self.timer)?;
            walker.leaf(&Field::new("Type"), &mut self.kind)?;
            walker.leaf(&Field::new("TestTimeout"), &mut self.test_timeout)?;
            walker.nested(&Field::new("SubInfo"), &mut self.sub_info)
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct InternalStruct {
        pub my_sub_int: i64,
        pub my_sub_bool: bool,
    }

    impl Schema for InternalStruct {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(
                &Field::new("MySubInt").with_default("9223372036854775807"),
                &mut self.my_sub_int,
            )?;
            walker.leaf(&Field::new("MySubBool").with_default("false"), &mut self.my_sub_bool)
        }
    }

    /// One field per supported kind, each with a boundary-value default.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct EveryType {
        pub my_int: isize,
        pub my_int8: i8,
        pub my_int16: i16,
        pub my_int32: i32,
        pub my_int64: i64,
        pub my_uint: usize,
        pub my_uint8: u8,
        pub my_uint16: u16,
        pub my_uint32: u32,
        pub my_uint64: u64,
        pub my_bool: bool,
        pub my_string: String,
        pub my_float32: f32,
        pub my_float64: f64,
        pub my_time: Duration,
        pub my_ports: Vec<u16>,
        pub my_struct: InternalStruct,
    }

    impl Schema for EveryType {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("MyInt").with_default("-32"), &mut self.my_int)?;
            walker.leaf(&Field::new("MyInt8").with_default("-128"), &mut self.my_int8)?;
            walker.leaf(&Field::new("MyInt16").with_default("-32768"), &mut self.my_int16)?;
            walker.leaf(
                &Field::new("MyInt32").with_default("-2147483648"),
                &mut self.my_int32,
            )?;
            walker.leaf(
                &Field::new("MyInt64").with_default("-9223372036854775808"),
                &mut self.my_int64,
            )?;
            walker.leaf(&Field::new("MyUInt").with_default("32"), &mut self.my_uint)?;
            walker.leaf(&Field::new("MyUInt8").with_default("255"), &mut self.my_uint8)?;
            walker.leaf(&Field::new("MyUInt16").with_default("65535"), &mut self.my_uint16)?;
            walker.leaf(
                &Field::new("MyUInt32").with_default("4294967295"),
                &mut self.my_uint32,
            )?;
            walker.leaf(
                &Field::new("MyUInt64").with_default("18446744073709551615"),
                &mut self.my_uint64,
            )?;
            walker.leaf(&Field::new("MyBool").with_default("true"), &mut self.my_bool)?;
            walker.leaf(
                &Field::new("MyString").with_default("four score and seven years ago"),
                &mut self.my_string,
            )?;
            walker.leaf(&Field::new("MyFloat32").with_default("4.123456"), &mut self.my_float32)?;
            walker.leaf(
                &Field::new("MyFloat64").with_default("-4.123456789"),
                &mut self.my_float64,
            )?;
            walker.leaf(&Field::new("MyTime").with_default("300"), &mut self.my_time)?;
            walker.leaf(&Field::new("MyPorts").with_default("[6379 6380]"), &mut self.my_ports)?;
            walker.nested(&Field::new("MyStruct"), &mut self.my_struct)
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Services {
        pub service_hosts: Vec<String>,
        pub service_ports: Vec<i32>,
    }

    impl Schema for Services {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("ServiceHosts"), &mut self.service_hosts)?;
            walker.leaf(&Field::new("ServicePorts"), &mut self.service_ports)
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Cluster {
        pub name: String,
        pub size: u8,
    }

    impl Schema for Cluster {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("Name").with_default("blue").namespace(), &mut self.name)?;
            walker.leaf(&Field::new("Size").with_default("3"), &mut self.size)
        }
    }

    /// Namespace fields before, inside, and after a nested record.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Layered {
        pub region: String,
        pub cluster: Cluster,
        pub tier: String,
    }

    impl Schema for Layered {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("Region").with_default("eu").namespace(), &mut self.region)?;
            walker.nested(&Field::new("Cluster"), &mut self.cluster)?;
            walker.leaf(&Field::new("Tier").with_default("web").namespace(), &mut self.tier)
        }
    }

    /// Authoring mistake: a non-string namespace field.
    #[derive(Debug, Default)]
    pub struct NumericNamespace {
        pub timer: i64,
    }

    impl Schema for NumericNamespace {
        fn walk(&mut self, walker: &mut dyn Walker) -> Result<(), StrufigError> {
            walker.leaf(&Field::new("Timer").with_default("5").namespace(), &mut self.timer)
        }
    }

    /// A driver whose backend is always unreachable.
    pub struct UnreachableDriver;

    impl Driver for UnreachableDriver {
        fn set_root_path(&mut self, _location: &str) -> Result<(), DriverError> {
            Ok(())
        }

        fn load(&mut self, _path: &str) -> Result<LoadStatus, DriverError> {
            Err(DriverError::Unavailable("connection refused".into()))
        }

        fn retrieve(&self, _key: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn fixtures_start_zeroed() {
        let config = RemoteConfig::default();
        assert!(config.environment.is_empty());
        assert_eq!(config.sub_info, SubInfo::default());
    }
}
