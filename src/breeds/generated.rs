// AUTO-GENERATED FILE. DO NOT EDIT BY HAND.
// Generated by bitb-tools v0.1.0 (`bitb-tools sync`).

use super::{AkcGroup, BreedEntry, BreedType, FciGroup, SourceTag};

pub static BREEDS: &[BreedEntry] = &[
    BreedEntry {
        key: "indie-indian-pariah",
        label: "Indie (Indian Pariah)",
        breed_type: BreedType::Purebred,
        aliases: &["Indian Pariah Dog", "Desi Dog"],
        sources: &[],
        fci: None,
        akc: None,
    },
    BreedEntry {
        key: "mix-breed",
        label: "Mix-breed",
        breed_type: BreedType::MixBreed,
        aliases: &[],
        sources: &[],
        fci: None,
        akc: None,
    },
    BreedEntry {
        key: "cross-breed",
        label: "Cross-breed",
        breed_type: BreedType::CrossBreed,
        aliases: &[],
        sources: &[],
        fci: None,
        akc: None,
    },
    BreedEntry {
        key: "affenpinscher",
        label: "Affenpinscher",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(186),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(1),
            section_name: Some("Pinscher and Schnauzer type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "akita",
        label: "Akita",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(255),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(5),
            section_name: Some("Asian Spitz and related breeds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "alaskan-malamute",
        label: "Alaskan Malamute",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(243),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(1),
            section_name: Some("Nordic Sledge Dogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "american-staffordshire-terrier",
        label: "American Staffordshire Terrier",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(286),
            group_no: Some(3),
            group_name: Some("Terriers"),
            section_no: Some(3),
            section_name: Some("Bull type Terriers"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Terrier"),
        }),
    },
    BreedEntry {
        key: "australian-shepherd",
        label: "Australian Shepherd",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(342),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Herding"),
        }),
    },
    BreedEntry {
        key: "basenji",
        label: "Basenji",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(43),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(6),
            section_name: Some("Primitive type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Hound"),
        }),
    },
    BreedEntry {
        key: "basset-hound",
        label: "Basset Hound",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(163),
            group_no: Some(6),
            group_name: Some("Scent hounds and related breeds"),
            section_no: Some(1),
            section_name: Some("Scent hounds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Hound"),
        }),
    },
    BreedEntry {
        key: "beagle",
        label: "Beagle",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(161),
            group_no: Some(6),
            group_name: Some("Scent hounds and related breeds"),
            section_no: Some(1),
            section_name: Some("Scent hounds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Hound"),
        }),
    },
    BreedEntry {
        key: "bearded-collie",
        label: "Bearded Collie",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(271),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Herding"),
        }),
    },
    BreedEntry {
        key: "bernese-mountain-dog",
        label: "Bernese Mountain Dog",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(45),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(3),
            section_name: Some("Swiss Mountain and Cattledogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "border-collie",
        label: "Border Collie",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(297),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Herding"),
        }),
    },
    BreedEntry {
        key: "boston-terrier",
        label: "Boston Terrier",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "boxer",
        label: "Boxer",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "bulldog",
        label: "Bulldog",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "bullmastiff",
        label: "Bullmastiff",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(157),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "cavalier-king-charles-spaniel",
        label: "Cavalier King Charles Spaniel",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(136),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(7),
            section_name: Some("English Toy Spaniels"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "chihuahua",
        label: "Chihuahua",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(218),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(6),
            section_name: Some("Chihuahueno"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "chow-chow",
        label: "Chow Chow",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(205),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(5),
            section_name: Some("Asian Spitz and related breeds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "cocker-spaniel",
        label: "Cocker Spaniel",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Sporting"),
        }),
    },
    BreedEntry {
        key: "dachshund",
        label: "Dachshund",
        breed_type: BreedType::Purebred,
        aliases: &["Teckel"],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(148),
            group_no: Some(4),
            group_name: Some("Dachshunds"),
            section_no: Some(1),
            section_name: Some("Dachshund"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Hound"),
        }),
    },
    BreedEntry {
        key: "dalmatian",
        label: "Dalmatian",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(153),
            group_no: Some(6),
            group_name: Some("Scent hounds and related breeds"),
            section_no: Some(3),
            section_name: Some("Related breeds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "doberman-pinscher",
        label: "Doberman Pinscher",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "dobermann",
        label: "Dobermann",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(143),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(1),
            section_name: Some("Pinscher and Schnauzer type"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "english-bulldog",
        label: "English Bulldog",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(149),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "english-cocker-spaniel",
        label: "English Cocker Spaniel",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(5),
            group_no: Some(8),
            group_name: Some("Retrievers - Flushing Dogs - Water Dogs"),
            section_no: Some(2),
            section_name: Some("Flushing Dogs"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "eurasier",
        label: "Eurasier",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(291),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(5),
            section_name: Some("Asian Spitz and related breeds"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "french-bulldog",
        label: "French Bulldog",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(101),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(11),
            section_name: Some("Small Molossian type Dogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "german-boxer",
        label: "German Boxer",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(144),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "german-shepherd-dog",
        label: "German Shepherd Dog",
        breed_type: BreedType::Purebred,
        aliases: &["German Shepherd", "Alsatian"],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(166),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Herding"),
        }),
    },
    BreedEntry {
        key: "golden-retriever",
        label: "Golden Retriever",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(111),
            group_no: Some(8),
            group_name: Some("Retrievers - Flushing Dogs - Water Dogs"),
            section_no: Some(1),
            section_name: Some("Retrievers"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Sporting"),
        }),
    },
    BreedEntry {
        key: "great-dane",
        label: "Great Dane",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(235),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "irish-setter",
        label: "Irish Setter",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(120),
            group_no: Some(7),
            group_name: Some("Pointing Dogs"),
            section_no: Some(2),
            section_name: Some("British and Irish Pointers and Setters"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Sporting"),
        }),
    },
    BreedEntry {
        key: "labrador-retriever",
        label: "Labrador Retriever",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(122),
            group_no: Some(8),
            group_name: Some("Retrievers - Flushing Dogs - Water Dogs"),
            section_no: Some(1),
            section_name: Some("Retrievers"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Sporting"),
        }),
    },
    BreedEntry {
        key: "lagotto-romagnolo",
        label: "Lagotto Romagnolo",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(298),
            group_no: Some(8),
            group_name: Some("Retrievers - Flushing Dogs - Water Dogs"),
            section_no: Some(3),
            section_name: Some("Water Dogs"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "maltese",
        label: "Maltese",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(65),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(1),
            section_name: Some("Bichons and related breeds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "newfoundland",
        label: "Newfoundland",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(50),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "pekingese",
        label: "Pekingese",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(207),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(8),
            section_name: Some("Japan Chin and Pekingese"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "pembroke-welsh-corgi",
        label: "Pembroke Welsh Corgi",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Herding"),
        }),
    },
    BreedEntry {
        key: "pomeranian",
        label: "Pomeranian",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "poodle",
        label: "Poodle",
        breed_type: BreedType::Purebred,
        aliases: &["Caniche"],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(172),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(2),
            section_name: Some("Poodle"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "pug",
        label: "Pug",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(253),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(11),
            section_name: Some("Small Molossian type Dogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "rottweiler",
        label: "Rottweiler",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(147),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "saint-bernard",
        label: "Saint Bernard",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(61),
            group_no: Some(2),
            group_name: Some("Pinscher and Schnauzer - Molossoid and Swiss Mountain and Cattledogs"),
            section_no: Some(2),
            section_name: Some("Molossian type"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "samoyed",
        label: "Samoyed",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(212),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(1),
            section_name: Some("Nordic Sledge Dogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "schipperke",
        label: "Schipperke",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(83),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "shiba",
        label: "Shiba",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(257),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(5),
            section_name: Some("Asian Spitz and related breeds"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "shiba-inu",
        label: "Shiba Inu",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Akc],
        fci: None,
        akc: Some(AkcGroup {
            group_name: Some("Non-Sporting"),
        }),
    },
    BreedEntry {
        key: "shih-tzu",
        label: "Shih Tzu",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(208),
            group_no: Some(9),
            group_name: Some("Companion and Toy Dogs"),
            section_no: Some(5),
            section_name: Some("Tibetan breeds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
    BreedEntry {
        key: "siberian-husky",
        label: "Siberian Husky",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(270),
            group_no: Some(5),
            group_name: Some("Spitz and primitive types"),
            section_no: Some(1),
            section_name: Some("Nordic Sledge Dogs"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Working"),
        }),
    },
    BreedEntry {
        key: "welsh-corgi-pembroke",
        label: "Welsh Corgi (Pembroke)",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci],
        fci: Some(FciGroup {
            breed_no: Some(39),
            group_no: Some(1),
            group_name: Some("Sheepdogs and Cattledogs (except Swiss Cattledogs)"),
            section_no: Some(1),
            section_name: Some("Sheepdogs"),
        }),
        akc: None,
    },
    BreedEntry {
        key: "whippet",
        label: "Whippet",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(162),
            group_no: Some(10),
            group_name: Some("Sighthounds"),
            section_no: Some(3),
            section_name: Some("Short-haired Sighthounds"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Hound"),
        }),
    },
    BreedEntry {
        key: "yorkshire-terrier",
        label: "Yorkshire Terrier",
        breed_type: BreedType::Purebred,
        aliases: &[],
        sources: &[SourceTag::Fci, SourceTag::Akc],
        fci: Some(FciGroup {
            breed_no: Some(86),
            group_no: Some(3),
            group_name: Some("Terriers"),
            section_no: Some(4),
            section_name: Some("Toy Terriers"),
        }),
        akc: Some(AkcGroup {
            group_name: Some("Toy"),
        }),
    },
];

