//! Static catalogs mapping small integer codes to names.
//!
//! MPS placement records reference creatures and artifacts by index; these
//! tables carry the reverse-engineered names. Entries marked `UNUSED` or with
//! a trailing `(?)` are present in the game data but unconfirmed.

/// Creature catalog, indexed by the MPS element index when the element kind
/// is `Creature`.
pub const CREATURES: [&str; 28] = [
	"PLAYER_WIZARD",
	"Brownie",
	"Centaur",
	"Elf",
	"Griffin",
	"Hero",
	"Phoenix",
	"Unicorn",
	"BLACK_DOG",
	"MANTICORE",
	"REDCAP",
	"SKELETON",
	"VAMPIRE",
	"WRAITH",
	"ZOMBIE",
	"BAT",
	"BASILISK",
	"CROCODILE",
	"DRAGON",
	"FAUN",
	"Champ of Law",
	"TROLL",
	"EYE",
	"Champ of chaos",
	"Wizard1",
	"Wizard2",
	"Wizard3",
	"Wizard4 (?)",
];

/// Object catalog, indexed by the MPS element index when the element kind
/// is `Artifact`.
pub const OBJECTS: [&str; 72] = [
	"MEAT",
	"BREAD",
	"FRUIT",
	"FISH",
	"WINE",
	"WATER BOTTLE",
	"PROVISION PACK",
	"QUILL",
	"SPORE OF SLUMBER",
	"SPORE OF STINGING",
	"SPORE OF SLAYING",
	"CAMPANIFORM BELL",
	"DRAGONS TEETH",
	"DRUM OF CONVOCATION",
	"EVIL EYE AMULET",
	"GLASSES OF VISION",
	"HAND OF GLORY",
	"HEX PENDANT",
	"HOLY WATER",
	"MANA SPRITE",
	"POISON",
	"RING OF MIGHT",
	"RING OF PROTECTION",
	"RUBY AMULET",
	"SALAMANDER BOOTS",
	"SCREAMING SKULL",
	"SEVEN LEAGUE BOOTS",
	"SYRINX PIPES",
	"SUMMON BROWNIE",
	"SUMMON CENTAUR",
	"SUMMON ELF",
	"SUMMON GRIFFIN",
	"SUMMON HERO",
	"SUMMON PHOENIX",
	"SUMMON UNICORN",
	"SUMMON BLACK_DOG",
	"SUMMON MANTICORE",
	"SUMMON REDCAP",
	"SUMMON SKELETON",
	"SUMMON VAMPIRE",
	"SUMMON WRAITH",
	"SUMMON ZOMBIE",
	"SUMMON BAT",
	"SUMMON BASILISK",
	"SUMMON CROCODILE",
	"SUMMON DRAGON",
	"SUMMON FAUN",
	"SUMMON SNAKE",
	"SUMMON TROLL",
	"SUMMON EYE",
	"CHEST",
	"KEY1",
	"KEY2",
	"SCROLL1",
	"SCROLL2",
	"SCROLL3",
	"SCROLL4",
	"SKULLS",
	"KEY3",
	"KEY4",
	"KEY5",
	"PLACE OF POWER",
	"UNUSED1",
	"UNUSED2",
	"UNUSED3",
	"UNUSED4",
	"UNUSED5",
	"UNUSED6",
	"UNUSED7",
	"UNUSED8",
	"UNUSED9",
	"UNUSED10",
];
