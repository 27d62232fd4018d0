//! Stable integer-index handles into the generation arenas.
//!
//! Rooms, sections, doors and halls reference each other in cycles (a
//! section owns a room, a room remembers its section; a hall references two
//! rooms, a room's section lists the halls that cross it). Rather than
//! `Rc`/`RefCell` or unsafe aliasing, every cross-reference is a plain index
//! into a `Vec` owned by the pipeline's context.

macro_rules! id_type {
    ($name:ident) => {
        #[doc = concat!("Index of a `", stringify!($name), "` in its arena.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(
            #[doc = "The raw arena index."]
            pub usize,
        );
    };
}

id_type!(SectionId);
id_type!(RoomId);
id_type!(DoorId);
id_type!(HallId);
