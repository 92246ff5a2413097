/// Curated platform/library products with known NVD vendor:product pairs.
///
/// Each entry is `(name pattern, vendor, product)`. Patterns are anchored
/// regular expressions tested against the component name; entries are
/// checked in order and the first hit wins, so more specific patterns
/// (`libcurl` before `curl`) come first.
pub const CURATED_PRODUCTS: &[(&str, &str, &str)] = &[
    (r"^(openssl|libssl\d*|libcrypto\d*)(-.*)?$", "openssl", "openssl"),
    (r"^(systemd|libsystemd\d*|udev|libudev\d*)(-.*)?$", "systemd_project", "systemd"),
    (r"^busybox(-.*)?$", "busybox", "busybox"),
    (r"^(glibc|libc6|eglibc)(-.*)?$", "gnu", "glibc"),
    (r"^(zlib|libz\d*)(-.*)?$", "zlib", "zlib"),
    (r"^libcurl\d*(-.*)?$", "haxx", "libcurl"),
    (r"^curl(-.*)?$", "haxx", "curl"),
    (r"^nginx(-.*)?$", "f5", "nginx"),
    (r"^u-boot(-.*)?$", "denx", "u-boot"),
    (r"^bash(-(dev|doc|dbg|loadable|ptest))?$", "gnu", "bash"),
    (r"^coreutils(-.*)?$", "gnu", "coreutils"),
    (r"^util-linux(-.*)?$", "kernel", "util-linux"),
    (r"^openssh(-.*)?$", "openbsd", "openssh"),
    (r"^dropbear(-.*)?$", "dropbear_ssh_project", "dropbear_ssh"),
    (r"^(dbus|libdbus-\d+)(-.*)?$", "freedesktop", "dbus"),
    (r"^(expat|libexpat\d*)(-.*)?$", "libexpat_project", "libexpat"),
    (r"^libxml2(-.*)?$", "xmlsoft", "libxml2"),
    (r"^libxslt(-.*)?$", "xmlsoft", "libxslt"),
    (r"^(sqlite3?|libsqlite3?)(-.*)?$", "sqlite", "sqlite"),
    (r"^(bzip2|libbz2)(-.*)?$", "bzip", "bzip2"),
    (r"^(xz|liblzma\d*)(-.*)?$", "tukaani", "xz"),
    (r"^(gnutls|libgnutls\d*)(-.*)?$", "gnu", "gnutls"),
    (r"^libgcrypt(-.*)?$", "gnupg", "libgcrypt"),
    (r"^gnupg\d?(-.*)?$", "gnupg", "gnupg"),
    (r"^libpng\d*(-.*)?$", "libpng", "libpng"),
    (r"^libjpeg(-turbo|\d+)?(-.*)?$", "libjpeg-turbo", "libjpeg-turbo"),
    (r"^(ncurses|libncurses\w*|libtinfo\d*)(-.*)?$", "gnu", "ncurses"),
    (r"^(readline|libreadline\d*)(-.*)?$", "gnu", "readline"),
    (r"^(e2fsprogs|libext2fs\d*|libcom-err\d*)(-.*)?$", "e2fsprogs_project", "e2fsprogs"),
    (r"^sudo(-.*)?$", "sudo_project", "sudo"),
    (r"^iptables(-.*)?$", "netfilter", "iptables"),
    (r"^wpa-supplicant(-.*)?$", "w1.fi", "wpa_supplicant"),
    (r"^bluez\d?(-.*)?$", "bluez", "bluez"),
    (r"^grub2?(-.*)?$", "gnu", "grub2"),
    (r"^dnsmasq(-.*)?$", "thekelleys", "dnsmasq"),
    (r"^lighttpd(-.*)?$", "lighttpd", "lighttpd"),
    (r"^mosquitto(-.*)?$", "eclipse", "mosquitto"),
    (r"^(libarchive|bsdtar)(-.*)?$", "libarchive", "libarchive"),
    (r"^(libpcre2|pcre2)(-.*)?$", "pcre", "pcre2"),
    (r"^(gcc-runtime|libgcc\d*|libstdc\+\+\d*)(-.*)?$", "gnu", "gcc"),
    (r"^binutils(-.*)?$", "gnu", "binutils"),
    (r"^tar(-.*)?$", "gnu", "tar"),
    (r"^gzip(-.*)?$", "gnu", "gzip"),
    (r"^python3$", "python", "python"),
    (r"^perl$", "perl", "perl"),
];
