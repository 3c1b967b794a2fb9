/// A macro which defines an enum type over a 16-bit wire value.
///
/// Values not listed are kept as `Unknown(u16)` so that a peer offering
/// something we never heard of still round-trips.
macro_rules! enum_builder {
    (@U16
        EnumName: $enum_name: ident;
        EnumVal { $( $enum_var: ident => $enum_val: literal ),* }
    ) => {
        #[allow(non_camel_case_types)]
        #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
        pub enum $enum_name {
            $( $enum_var),*
            ,Unknown(u16)
        }
        impl $enum_name {
            pub fn get_u16(&self) -> u16 {
                match *self {
                    $( $enum_name::$enum_var => $enum_val),*
                    ,$enum_name::Unknown(x) => x
                }
            }
        }
        impl From<u16> for $enum_name {
            fn from(x: u16) -> Self {
                match x {
                    $( $enum_val => $enum_name::$enum_var),*
                    ,x => $enum_name::Unknown(x)
                }
            }
        }
        impl $crate::utils::codec::Codec for $enum_name {
            fn encode(&self, bytes: &mut Vec<u8>) {
                $crate::utils::codec::Codec::encode(&self.get_u16(), bytes);
            }

            fn read(r: &mut $crate::utils::codec::Reader) -> Option<Self> {
                <u16 as $crate::utils::codec::Codec>::read(r).map($enum_name::from)
            }
        }
    }
}
