use crate::model::Difficulty;

use super::lexicon::LexiconEntry;

// Answers lean coastal to sit well next to the local set. Clues are kept
// short; the puzzle page has narrow columns.

const EASY: &[(&str, &str)] = &[
    // threes
    ("SEA", "Open water"),
    ("MAP", "Chart on the wall"),
    ("OAR", "Rowboat mover"),
    ("BAY", "Sheltered water"),
    ("NET", "Trawler's haul-in"),
    ("FOG", "Morning gray"),
    ("ICE", "Winter hazard on deck"),
    ("TEA", "Afternoon cup"),
    ("SUN", "It burns off the mist"),
    ("CUP", "Trophy or mug"),
    ("ERA", "Stretch of history"),
    ("OWL", "Night hooter"),
    ("ARC", "Rainbow shape"),
    ("INK", "Squid's cloud"),
    ("GEM", "Jeweler's stock"),
    ("AGE", "Candles on the cake"),
    ("EAR", "Corn unit"),
    ("OAK", "Barrel wood"),
    ("SKY", "Gull's domain"),
    ("FIG", "Newton fruit"),
    ("PEN", "Signer's tool"),
    ("HAT", "Sou'wester, for one"),
    ("JAM", "Toast topper"),
    ("LOG", "Ship's record"),
    ("RUG", "Floor cover"),
    ("BEE", "Clover visitor"),
    // fours
    ("PIER", "Walkway over water"),
    ("TIDE", "Twice-daily rise"),
    ("SAND", "Castle material"),
    ("WAVE", "Surfer's ride"),
    ("BOAT", "Harbor sight"),
    ("DOCK", "Where to tie up"),
    ("FISH", "Angler's goal"),
    ("ROPE", "Coil on deck"),
    ("SAIL", "Wind catcher"),
    ("MAST", "Sail holder"),
    ("REEF", "Snorkeler's stop"),
    ("GULL", "Chip thief"),
    ("SALT", "Sea seasoning"),
    ("MOON", "Tide puller"),
    ("STAR", "Navigator's guide"),
    ("RAIN", "Wiper's work"),
    ("WIND", "Kite lifter"),
    ("LAKE", "Inland water"),
    ("SHIP", "Ocean crosser"),
    ("KNOT", "Speed at sea"),
    ("BIRD", "Feeder visitor"),
    ("TREE", "Ring bearer"),
    ("DUNE", "Grassy sand hill"),
    ("CRAB", "Sideways walker"),
    ("KELP", "Underwater forest"),
    ("BUOY", "Channel marker"),
    ("SOAP", "Bar by the sink"),
    ("LAMP", "Desk light"),
    ("BOOK", "Library loan"),
    ("DOOR", "Knocker's spot"),
    ("KITE", "Beach flyer"),
    ("BELL", "Fog warning"),
    ("CAKE", "Birthday centerpiece"),
    // fives
    ("SHORE", "Where waves end"),
    ("BEACH", "Towel territory"),
    ("OCEAN", "The big blue"),
    ("CORAL", "Reef builder"),
    ("PEARL", "Oyster's prize"),
    ("WHARF", "Cargo landing"),
    ("CANOE", "Paddler's craft"),
    ("RIVER", "Delta feeder"),
    ("STORM", "Small-craft warning cause"),
    ("CLOUD", "Rain holder"),
    ("SHELL", "Beachcomber's find"),
    ("WHALE", "Spout maker"),
    ("CABIN", "Below-decks room"),
    ("LIGHT", "What the tower shows"),
    ("NORTH", "Compass top"),
    ("SOUTH", "Winter birds' heading"),
    ("WATER", "It finds its level"),
    ("TROUT", "Stream catch"),
    ("HERON", "Shallows stalker"),
    ("OTTER", "Playful swimmer"),
    ("APPLE", "Orchard pick"),
    ("CHAIR", "Porch seat"),
    ("PIANO", "Parlor instrument"),
    ("BREAD", "Baker's basic"),
    // sixes
    ("HARBOR", "Safe anchorage"),
    ("ANCHOR", "It holds the boat"),
    ("MARINA", "Yacht parking"),
    ("SUNSET", "Evening show"),
    ("ISLAND", "Land all around by water"),
    ("BRIDGE", "Span or card game"),
    ("BREEZE", "Gentle wind"),
    ("SEASON", "Quarter of the year"),
    ("PUFFIN", "Clown-beaked seabird"),
    ("DINGHY", "Little tender"),
    ("LAGOON", "Atoll's pool"),
    ("PADDLE", "Canoe propeller"),
    ("SALMON", "Upstream swimmer"),
    ("VESSEL", "Craft afloat"),
    ("VOYAGE", "Long sail"),
    ("OYSTER", "Half-shell serving"),
    ("MUSSEL", "Rope-grown shellfish"),
    ("CANDLE", "Power-cut standby"),
    ("GARDEN", "Plot to tend"),
    ("WINDOW", "Harbor view frame"),
    ("BOTTLE", "Message holder"),
    ("MEADOW", "Buttercup setting"),
    // sevens
    ("CAPTAIN", "One with the wheel"),
    ("COMPASS", "Bearing giver"),
    ("HORIZON", "Where sea meets sky"),
    ("LOBSTER", "Pot catch"),
    ("SEAWEED", "Tangle on the tideline"),
    ("HARPOON", "Whaler's spear"),
    ("DOLPHIN", "Bow-wave rider"),
    ("PELICAN", "Pouched diver"),
    ("SAILING", "Regatta activity"),
    ("FISHERY", "Managed grounds"),
    ("CURRENT", "Swimmer's worry"),
    ("LANTERN", "Deck light"),
    ("SEAGULL", "Boardwalk scrounger"),
    ("MARINER", "Old salt"),
    ("KITCHEN", "Chowder's birthplace"),
    ("PICTURE", "Frame filler"),
    ("BLANKET", "Picnic spread"),
    // eights
    ("MACKEREL", "Oily schooling fish"),
    ("SEASHORE", "She sells shells here"),
    ("STARFISH", "Five-armed clinger"),
    ("SCHOONER", "Two-masted sailer"),
    ("MOORINGS", "Harbor berths"),
    ("PORPOISE", "Dolphin's blunt cousin"),
    ("BARNACLE", "Hull hitchhiker"),
    ("DOCKYARD", "Repair basin"),
    ("ISLANDER", "Ferry regular"),
    ("MAINSAIL", "Boom's big sheet"),
    ("FORECAST", "Reason to stay in port"),
    ("NAUTICAL", "Of ships and the sea"),
    ("UMBRELLA", "Squall shelter"),
    ("ELEPHANT", "Trunk carrier"),
    ("SANDWICH", "Lunch pail staple"),
    // nines
    ("DRIFTWOOD", "Bleached beach timber"),
    ("SAILBOATS", "Weekend fleet"),
    ("FISHERMEN", "They motor out at dawn"),
    ("SHORELINE", "Coast's edge"),
    ("TIDEWATER", "Low coastal country"),
    ("STEAMSHIP", "Liner of old"),
    ("NAVIGATOR", "Course plotter"),
    ("WHIRLPOOL", "Spinning hazard"),
    ("ANCHORAGE", "Holding ground"),
    ("WATERLINE", "Painted hull boundary"),
    ("BUTTERFLY", "Milkweed visitor"),
    ("CHOCOLATE", "Fudge base"),
    ("NEWSPAPER", "Where this puzzle runs"),
];

const MEDIUM: &[(&str, &str)] = &[
    // threes
    ("RIG", "Masts and lines, together"),
    ("EBB", "Tide going out"),
    ("AFT", "Toward the stern"),
    ("LEE", "Sheltered side"),
    ("COD", "Cape namesake"),
    ("FIN", "Dorsal sight"),
    ("SPA", "Soak spot"),
    ("ORE", "Smelter input"),
    ("ADO", "Fuss"),
    ("EKE", "Scrape (out)"),
    ("APT", "Fitting"),
    // fours
    ("HULL", "Boat's body"),
    ("KEEL", "Steadying spine"),
    ("PROW", "Forwardmost point"),
    ("BRIG", "Ship's lockup"),
    ("WAKE", "Trail astern"),
    ("GALE", "Force eight blow"),
    ("CLAM", "Chowder morsel"),
    ("SILT", "Channel clogger"),
    ("HELM", "Steering station"),
    ("SPAR", "Mast or boom"),
    ("ECHO", "Sounder's return"),
    ("ALOE", "Sunburn soother"),
    ("ISLE", "Poet's island"),
    // fives
    ("SLOOP", "Single-masted yacht"),
    ("KETCH", "Two-master, mizzen forward of the rudder"),
    ("CLEAT", "Line's tie-off"),
    ("SONAR", "Depth finder"),
    ("SWELL", "Long rolling wave"),
    ("SQUID", "Calamari source"),
    ("ATLAS", "Book of maps"),
    ("DELTA", "River's fan"),
    ("FJORD", "Glacial inlet"),
    ("SIREN", "Luring singer"),
    ("AZURE", "Poetic sea blue"),
    ("CAIRN", "Trail marker pile"),
    ("EPOCH", "Geologic span"),
    ("NADIR", "Lowest point"),
    // sixes
    ("TILLER", "Rudder's handle"),
    ("RUDDER", "Steering blade"),
    ("FATHOM", "Six feet down"),
    ("GALLEY", "Ship's kitchen"),
    ("MARLIN", "Billed game fish"),
    ("JETSAM", "Goods thrown overboard"),
    ("COCKLE", "Heart-warming shellfish"),
    ("SHANTY", "Work song at the capstan"),
    ("OSPREY", "Fish hawk"),
    ("ZEPHYR", "Soft west wind"),
    ("COBALT", "Deep blue pigment"),
    ("INDIGO", "Dye plant shade"),
    ("ISOBAR", "Weather map line"),
    // sevens
    ("SEXTANT", "Noon-sight instrument"),
    ("BALLAST", "Stability weight"),
    ("FLOTSAM", "Wreckage afloat"),
    ("RIPTIDE", "Channel of outbound water"),
    ("MUDFLAT", "Low-tide expanse"),
    ("SKIPPER", "Boat boss"),
    ("TRAWLER", "Net dragger"),
    ("ESTUARY", "Where river meets tide"),
    ("REGATTA", "Sailing meet"),
    ("HALYARD", "Sail hoist line"),
    ("NARWHAL", "Tusked arctic whale"),
    ("MONSOON", "Seasonal deluge"),
    ("TYPHOON", "Pacific cyclone"),
    ("CYCLONE", "Rotating storm"),
    // eights
    ("WINDWARD", "Into the weather"),
    ("BOWSPRIT", "Spar past the prow"),
    ("SARGASSO", "Weedy Atlantic sea"),
    ("UNDERTOW", "Hidden pull"),
    ("SHIPYARD", "Launch site"),
    ("PLANKTON", "Whale food"),
    ("SEAFARER", "Ocean traveler"),
    ("DRIFTNET", "Free-floating mesh"),
    ("DOLDRUMS", "Windless belt"),
    ("MERIDIAN", "Longitude line"),
    // nines
    ("ASTROLABE", "Sextant's ancestor"),
    ("SPINNAKER", "Downwind balloon sail"),
    ("GANGPLANK", "Boarding ramp"),
    ("JELLYFISH", "Stinging drifter"),
    ("AMIDSHIPS", "Neither fore nor aft"),
    ("SWORDFISH", "Broadbill"),
    ("LONGITUDE", "Chronometer's problem"),
    ("WATERFALL", "Gorge feature"),
];

const HARD: &[(&str, &str)] = &[
    // threes
    ("RIA", "Drowned river valley"),
    ("AIT", "River islet"),
    ("CAY", "Low coral island"),
    ("TOR", "Craggy hilltop"),
    // fours
    ("YAWL", "Two-master, mizzen abaft the rudder"),
    ("SCUD", "Race before the gale"),
    ("HOLT", "Otter's den"),
    ("NESS", "Headland, in place names"),
    // fives
    ("ABAFT", "Sternward of"),
    ("BIGHT", "Loop in a line, or a wide bay"),
    ("SPRIT", "Diagonal sail spar"),
    ("SHOAL", "Chart's shaded warning"),
    ("SCREE", "Loose slope rock"),
    ("KEDGE", "Small warping anchor"),
    ("ABEAM", "At right angles to the keel"),
    // sixes
    ("LATEEN", "Triangular rig of the dhow"),
    ("LEEWAY", "Drift off course"),
    ("MIZZEN", "Aftmost mast"),
    ("GUNNEL", "Gunwale, informally"),
    ("STRAKE", "Run of hull planking"),
    ("THWART", "Rower's bench"),
    ("SELKIE", "Seal of folklore"),
    // sevens
    ("GUNWALE", "Boat's upper edge"),
    ("LANYARD", "Short securing cord"),
    ("PAINTER", "Bow line, not an artist"),
    ("SCUPPER", "Deck drain"),
    ("SPANKER", "Fore-and-aft sail on the mizzen"),
    ("CAPSTAN", "Anchor winch"),
    ("FUTTOCK", "Curved rib timber"),
    ("DEADEYE", "Rigging block without sheaves"),
    // eights
    ("BINNACLE", "Compass housing"),
    ("TAFFRAIL", "Rail across the stern"),
    ("GARBOARD", "Plank next to the keel"),
    ("LARBOARD", "Port, in Nelson's day"),
    ("FORESTAY", "Line from bow to masthead"),
    ("STAYSAIL", "Sail hanked to a stay"),
    // nines
    ("HAWSEPIPE", "Anchor chain's channel"),
    ("SPRITSAIL", "Barge's four-cornered sail"),
    ("CROSSTREE", "Spreader aloft"),
    ("MIZZENTOP", "Platform on the aftmost mast"),
    ("BOATSWAIN", "Deck crew's chief"),
];

// Saltmere references. Ordinary words are fine here when the clue only lands
// for locals.
const LOCAL: &[(&str, &str)] = &[
    ("EEL", "Smokehouse specialty on Quay Street"),
    ("AYE", "Harbormaster's assent"),
    ("QUAY", "Street along the old seawall"),
    ("MERE", "The water the town is named for"),
    ("TERN", "Breakwater nester"),
    ("WEIR", "Fish trap up the estuary"),
    ("FERRY", "Hourly ride to Gullrock"),
    ("BRINY", "Nickname for the town pool"),
    ("SKIFF", "What the rowing club races"),
    ("PILOT", "Guide past the harbor bar"),
    ("JETTY", "Where the day boats tie up"),
    ("KIPPER", "Breakfast at the Dockside Diner"),
    ("SEINER", "Purse-net boat in the fleet"),
    ("WRASSE", "Reef fish the divers log"),
    ("HERRING", "Fish on the town crest"),
    ("SEAWALL", "Promenade built after the 1911 storm"),
    ("FOGHORN", "Night sound off the point"),
    ("CRABPOT", "Gear stacked by the jetty"),
    ("DREDGER", "It keeps the channel open"),
    ("SANDBAR", "Hazard at the harbor mouth"),
    ("MOORAGE", "Monthly fee at the marina"),
    ("SALTMERE", "This very town"),
    ("GULLROCK", "Islet off the harbor mouth"),
    ("CHANDLER", "Oldest shop on the waterfront"),
    ("BAITSHOP", "Corner store for anglers"),
    ("CLAMBAKE", "August fundraiser on the beach"),
    ("BOARDWALK", "Summer stroll by the dunes"),
    ("SALTMARSH", "Reserve east of town"),
    ("OYSTERMAN", "Tonger working the beds"),
];

pub(super) const TITLE_PHRASES: &[&str] = &[
    "Coffee Break",
    "Morning Crossing",
    "Quick Study",
    "Evening Puzzler",
    "Sunday Special",
    "Lunchtime Teaser",
    "Week in Words",
    "Crossed Wires",
];

pub(super) const LOCAL_TITLE_PHRASES: &[&str] = &[
    "Saltmere Crossing",
    "Harborside Puzzler",
    "Quay Street Quiz",
    "Tide Tables",
];

pub(super) fn entries() -> Vec<LexiconEntry> {
    let tiers = [
        (Difficulty::Easy, EASY),
        (Difficulty::Medium, MEDIUM),
        (Difficulty::Hard, HARD),
    ];

    let mut entries: Vec<LexiconEntry> = tiers
        .iter()
        .flat_map(|&(tier, rows)| {
            rows.iter().map(move |&(word, clue)| LexiconEntry {
                word: word.to_string(),
                clue: clue.to_string(),
                tier,
                local: false,
            })
        })
        .collect();

    entries.extend(LOCAL.iter().map(|&(word, clue)| LexiconEntry {
        word: word.to_string(),
        clue: clue.to_string(),
        tier: Difficulty::Easy,
        local: true,
    }));

    entries
}
