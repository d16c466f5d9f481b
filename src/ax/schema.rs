//! Common attribute type URIs.
//!
//! Taken from the OpenID attribute properties list. Providers differ in which
//! of these they answer; many older ones only know the `axschema.org` forms,
//! which are not listed here.

#![allow(missing_docs)]

pub const NAME_PERSON_PREFIX: &str = "http://openid.net/schema/namePerson/prefix";
pub const NAME_PERSON_FIRST: &str = "http://openid.net/schema/namePerson/first";
pub const NAME_PERSON_LAST: &str = "http://openid.net/schema/namePerson/last";
pub const NAME_PERSON_MIDDLE: &str = "http://openid.net/schema/namePerson/middle";
pub const NAME_PERSON_SUFFIX: &str = "http://openid.net/schema/namePerson/suffix";
pub const NAME_PERSON_FRIENDLY: &str = "http://openid.net/schema/namePerson/friendly";
pub const PERSON_GUID: &str = "http://openid.net/schema/person/guid";

pub const BIRTH_YEAR: &str = "http://openid.net/schema/birthDate/birthYear";
pub const BIRTH_MONTH: &str = "http://openid.net/schema/birthDate/birthMonth";
pub const BIRTHDAY: &str = "http://openid.net/schema/birthDate/birthday";
pub const GENDER: &str = "http://openid.net/schema/gender";
pub const LANGUAGE_PREF: &str = "http://openid.net/schema/language/pref";

pub const PHONE_DEFAULT: &str = "http://openid.net/schema/contact/phone/default";
pub const PHONE_HOME: &str = "http://openid.net/schema/contact/phone/home";
pub const PHONE_BUSINESS: &str = "http://openid.net/schema/contact/phone/business";
pub const PHONE_CELL: &str = "http://openid.net/schema/contact/phone/cell";
pub const PHONE_FAX: &str = "http://openid.net/schema/contact/phone/fax";

pub const POSTAL_ADDRESS_HOME: &str = "http://openid.net/schema/contact/postaladdress/home";
pub const POSTAL_ADDRESS_ADDITIONAL_HOME: &str =
    "http://openid.net/schema/contact/postaladdressadditional/home";
pub const CITY_HOME: &str = "http://openid.net/schema/contact/city/home";
pub const STATE_HOME: &str = "http://openid.net/schema/contact/state/home";
pub const COUNTRY_HOME: &str = "http://openid.net/schema/contact/country/home";
pub const POSTAL_CODE_HOME: &str = "http://openid.net/schema/contact/postalcode/home";

pub const POSTAL_ADDRESS_BUSINESS: &str = "http://openid.net/schema/contact/postaladdress/business";
pub const POSTAL_ADDRESS_ADDITIONAL_BUSINESS: &str =
    "http://openid.net/schema/contact/postaladdressadditional/business";
pub const CITY_BUSINESS: &str = "http://openid.net/schema/contact/city/business";
pub const STATE_BUSINESS: &str = "http://openid.net/schema/contact/state/business";
pub const COUNTRY_BUSINESS: &str = "http://openid.net/schema/contact/country/business";
pub const POSTAL_CODE_BUSINESS: &str = "http://openid.net/schema/contact/postalcode/business";

pub const IM_DEFAULT: &str = "http://openid.net/schema/contact/IM/default";
pub const IM_AIM: &str = "http://openid.net/schema/contact/IM/AIM";
pub const IM_ICQ: &str = "http://openid.net/schema/contact/IM/ICQ";
pub const IM_MSN: &str = "http://openid.net/schema/contact/IM/MSN";
pub const IM_YAHOO: &str = "http://openid.net/schema/contact/IM/Yahoo";
pub const IM_JABBER: &str = "http://openid.net/schema/contact/IM/Jabber";
pub const IM_SKYPE: &str = "http://openid.net/schema/contact/IM/Skype";

pub const CONTACT_EMAIL: &str = "http://openid.net/schema/contact/internet/email";
pub const CONTACT_WEB: &str = "http://openid.net/schema/contact/web/default";
